//! Note storage: one flat directory of Markdown files.

use crate::error::{NoteError, Result};
use crate::note::NOTE_EXTENSION;
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

/// Handle to the notes directory.
///
/// Every operation re-reads the filesystem; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct NoteStore {
    /// Root path of the notes directory.
    root: PathBuf,
}

/// Outcome of [`NoteStore::create_note`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

impl NoteStore {
    /// Open the notes directory, creating it (with parents) if absent.
    ///
    /// Idempotent: opening an existing directory is a no-op. A creation
    /// failure here is fatal to the program.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();

        if !root.is_dir() {
            fs::create_dir_all(&root).map_err(|source| NoteError::CreateDir {
                path: root.clone(),
                source,
            })?;
        }

        Ok(Self { root })
    }

    /// Root path of the notes directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path to a note by file name.
    pub fn note_path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Check if a note exists.
    pub fn note_exists(&self, name: &str) -> bool {
        self.note_path(name).is_file()
    }

    /// List the file names of all notes, sorted lexicographically.
    ///
    /// Non-recursive: only direct children of the notes directory whose
    /// name ends in `.md` are returned.
    pub fn list_notes(&self) -> Result<Vec<String>> {
        let pattern = self.root.join(format!("*.{}", NOTE_EXTENSION));
        let pattern_str = pattern.to_string_lossy();

        let mut notes = Vec::new();

        for entry in glob(&pattern_str)? {
            match entry {
                Ok(path) => {
                    if path.is_file() {
                        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                            notes.push(name.to_string());
                        }
                    }
                }
                Err(e) => {
                    return Err(NoteError::ReadDir {
                        path: self.root.clone(),
                        source: e.into_error(),
                    });
                }
            }
        }

        notes.sort();

        Ok(notes)
    }

    /// Write a new note, unless one with that name already exists.
    ///
    /// Existing notes are never overwritten; the caller learns which case
    /// occurred from the returned [`CreateOutcome`].
    pub fn create_note(&self, name: &str, content: &str) -> Result<CreateOutcome> {
        if self.note_exists(name) {
            return Ok(CreateOutcome::AlreadyExists);
        }

        fs::write(self.note_path(name), content)?;
        Ok(CreateOutcome::Created)
    }

    /// Delete a note by file name.
    ///
    /// A note that vanished between listing and removal surfaces as
    /// [`NoteError::NoteNotFound`] rather than silently succeeding.
    pub fn delete_note(&self, name: &str) -> Result<()> {
        let path = self.note_path(name);

        if !path.is_file() {
            return Err(NoteError::NoteNotFound(path));
        }

        fs::remove_file(path)?;
        Ok(())
    }
}
