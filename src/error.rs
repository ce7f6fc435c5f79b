//! Error types for notelet.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for notelet operations.
#[derive(Error, Debug)]
pub enum NoteError {
    #[error("Could not create notes directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not read notes directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Invalid note title: {0}")]
    InvalidTitle(String),

    #[error("Failed to launch {command}: {source}")]
    Launch {
        command: String,
        source: std::io::Error,
    },

    #[error("{command} exited with status {}", .code.map(|c| c.to_string()).unwrap_or_else(|| "signal".to_string()))]
    ToolFailed { command: String, code: Option<i32> },

    #[error("Config error: {0}")]
    Config(String),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for notelet operations.
pub type Result<T> = std::result::Result<T, NoteError>;

impl NoteError {
    /// True for errors that abort only the current menu operation.
    ///
    /// Everything except the startup failures is recoverable: the menu loop
    /// reports the message and keeps running.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            NoteError::CreateDir { .. } | NoteError::Config(_) | NoteError::TomlParse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_failed_display() {
        let err = NoteError::ToolFailed {
            command: "fzf".to_string(),
            code: Some(130),
        };
        assert_eq!(err.to_string(), "fzf exited with status 130");

        let err = NoteError::ToolFailed {
            command: "nvim".to_string(),
            code: None,
        };
        assert_eq!(err.to_string(), "nvim exited with status signal");
    }

    #[test]
    fn test_recoverability() {
        let fatal = NoteError::CreateDir {
            path: PathBuf::from("/notes"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!fatal.is_recoverable());

        let local = NoteError::NoteNotFound(PathBuf::from("gone.md"));
        assert!(local.is_recoverable());
    }
}
