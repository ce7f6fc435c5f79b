//! The interactive menu loop.
//!
//! Renders the action list through the selector, dispatches the chosen
//! operation, and repeats until "Exit" or a selector failure. Recoverable
//! operation errors are reported and the loop continues.

use crate::cli::output::Output;
use crate::cli::{create, delete, search};
use crate::error::Result;
use crate::launcher::{ProcessLauncher, Toolbox};
use crate::selector::Selector;
use crate::store::NoteStore;
use std::io::BufRead;

/// Display height passed to the selector for the menu.
const MENU_HEIGHT: u32 = 10;

/// One action on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    Search,
    Delete,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order.
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::Create,
        MenuChoice::Search,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Create => "Create a new note",
            MenuChoice::Search => "Search and open notes",
            MenuChoice::Delete => "Delete a note",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|choice| choice.label() == label)
    }
}

/// Run the menu loop until the user exits.
///
/// A selector failure ends the loop after being reported; recoverable
/// operation errors are reported without ending it.
pub fn run<L: ProcessLauncher>(
    store: &NoteStore,
    tools: &Toolbox<L>,
    input: &mut dyn BufRead,
    output: &Output,
) -> Result<()> {
    let options: Vec<String> = MenuChoice::ALL
        .iter()
        .map(|choice| choice.label().to_string())
        .collect();

    loop {
        let picked = match Selector::new(&tools.selector_cmd)
            .prompt("Select an option: ")
            .height(MENU_HEIGHT)
            .pick(&tools.launcher, &options)
        {
            Ok(picked) => picked,
            Err(e) => {
                output.error(&format!("Error displaying menu: {}", e));
                break;
            }
        };

        let label = picked.first().map(String::as_str).unwrap_or("");

        let result = match MenuChoice::from_label(label) {
            Some(MenuChoice::Create) => create::run(store, tools, input, output),
            Some(MenuChoice::Search) => search::run(store, tools, output),
            Some(MenuChoice::Delete) => delete::run(store, tools, input, output),
            Some(MenuChoice::Exit) => break,
            None => {
                output.status("Invalid selection");
                continue;
            }
        };

        if let Err(e) = result {
            if !e.is_recoverable() {
                return Err(e);
            }
            output.error(&format!("Error: {}", e));
        }
    }

    Ok(())
}
