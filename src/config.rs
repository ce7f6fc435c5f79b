//! Configuration for storage path and external tools.

use crate::error::{NoteError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime configuration, constructed once at startup and passed to every
/// operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the notes.
    pub notes_dir: PathBuf,
    /// Command launched to edit a note.
    pub editor_cmd: String,
    /// Command launched to select from a list.
    pub selector_cmd: String,
}

impl Default for Config {
    fn default() -> Self {
        let notes_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("Notes");

        let editor_cmd = std::env::var("EDITOR").unwrap_or_else(|_| "nvim".to_string());

        Self {
            notes_dir,
            editor_cmd,
            selector_cmd: "fzf".to_string(),
        }
    }
}

impl Config {
    /// Default config file location: `<config_dir>/notelet/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("notelet").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location when
    /// `path` is `None`. A missing file is not an error; defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.is_file() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path).map_err(|e| {
            NoteError::Config(format!("could not read {}: {}", path.display(), e))
        })?;

        Ok(toml::from_str(&raw)?)
    }
}
