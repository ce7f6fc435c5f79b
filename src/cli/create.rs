//! Create operation: prompt for a title, write the template, open the
//! editor.

use crate::cli::output::{read_line, Output};
use crate::error::Result;
use crate::launcher::{ProcessLauncher, Toolbox};
use crate::note;
use crate::store::{CreateOutcome, NoteStore};
use std::io::BufRead;

pub fn run<L: ProcessLauncher>(
    store: &NoteStore,
    tools: &Toolbox<L>,
    input: &mut dyn BufRead,
    output: &Output,
) -> Result<()> {
    output.prompt("Enter the note title: ");
    let raw = read_line(input)?;
    let title = note::sanitize_title(&raw)?;

    let name = note::today_filename(&title);

    // A note with this name from earlier today is opened, not overwritten.
    match store.create_note(&name, &note::render_template_now(&title))? {
        CreateOutcome::Created => output.status(&format!("Created new note: {}", name)),
        CreateOutcome::AlreadyExists => output.status(&format!("Note already exists: {}", name)),
    }

    if let Err(e) = tools.open_in_editor(&store.note_path(&name)) {
        output.error(&format!("Error opening note: {}", e));
    }

    Ok(())
}
