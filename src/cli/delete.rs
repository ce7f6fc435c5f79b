//! Delete operation: fuzzy-select notes, confirm each, remove from storage.

use crate::cli::output::{read_line, Output};
use crate::error::Result;
use crate::launcher::{ProcessLauncher, Toolbox};
use crate::selector::Selector;
use crate::store::NoteStore;
use std::io::BufRead;

pub fn run<L: ProcessLauncher>(
    store: &NoteStore,
    tools: &Toolbox<L>,
    input: &mut dyn BufRead,
    output: &Output,
) -> Result<()> {
    let notes = store.list_notes()?;

    if notes.is_empty() {
        output.status("No notes found.");
        return Ok(());
    }

    let picked = Selector::new(&tools.selector_cmd)
        .prompt("Select a note to delete: ")
        .multi()
        .pick(&tools.launcher, &notes)?;

    // Each selected note gets its own confirmation; a removal error does
    // not abort the remaining selections.
    for name in picked {
        output.prompt(&format!("Are you sure you want to delete {}? (y/n): ", name));
        let answer = read_line(input)?;

        if matches!(answer.trim(), "y" | "Y") {
            match store.delete_note(&name) {
                Ok(()) => output.status(&format!("Deleted note: {}", name)),
                Err(e) => output.error(&format!("Error deleting note: {}", e)),
            }
        } else {
            output.status("Deletion cancelled.");
        }
    }

    Ok(())
}
