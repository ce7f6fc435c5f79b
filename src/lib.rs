//! Notelet - a terminal launcher for a flat directory of Markdown notes.
//!
//! # Overview
//!
//! Notelet keeps notes as plain `.md` files in one directory and drives
//! everything else through external tools: an fzf-style fuzzy selector for
//! menus and note picking, and your editor for the notes themselves.
//!
//! - Note creation from a date + title template
//! - Fuzzy search with a preview pane, opening selections in the editor
//! - Deletion with per-file confirmation
//! - A selector-driven menu loop tying the operations together
//!
//! # Example
//!
//! ```no_run
//! use notelet::{NoteStore, SystemLauncher, Toolbox};
//!
//! let store = NoteStore::open("/path/to/notes").unwrap();
//! for name in store.list_notes().unwrap() {
//!     println!("{}", name);
//! }
//!
//! let tools = Toolbox::new(SystemLauncher, "nvim", "fzf");
//! tools.open_in_editor(&store.note_path("2024-01-01_todo.md")).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod launcher;
pub mod note;
pub mod selector;
pub mod store;

// Re-export main types at crate root
pub use config::Config;
pub use error::{NoteError, Result};
pub use launcher::{ProcessLauncher, SystemLauncher, Toolbox};
pub use selector::Selector;
pub use store::NoteStore;
