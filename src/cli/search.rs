//! Search operation: fuzzy-select over the note list with a preview pane,
//! then open the selection in the editor.

use crate::cli::output::Output;
use crate::error::Result;
use crate::launcher::{ProcessLauncher, Toolbox};
use crate::selector::Selector;
use crate::store::NoteStore;

/// Preview window layout passed to the selector.
const PREVIEW_WINDOW: &str = "right:70%";

pub fn run<L: ProcessLauncher>(
    store: &NoteStore,
    tools: &Toolbox<L>,
    output: &Output,
) -> Result<()> {
    let notes = store.list_notes()?;

    if notes.is_empty() {
        output.status("No notes found.");
        return Ok(());
    }

    let preview = format!(
        "bat --style=plain --color=always {}/{{}}",
        store.root().display()
    );

    let picked = Selector::new(&tools.selector_cmd)
        .multi()
        .preview(preview, PREVIEW_WINDOW)
        .pick(&tools.launcher, &notes)?;

    // Multi-selection opens every selected note in turn.
    for name in picked {
        if let Err(e) = tools.open_in_editor(&store.note_path(&name)) {
            output.error(&format!("Error opening note: {}", e));
        }
    }

    Ok(())
}
