//! Process launching capability.
//!
//! All external-tool side effects go through [`ProcessLauncher`] so the
//! operations can be exercised with scripted launchers instead of real
//! subprocesses.

use crate::error::{NoteError, Result};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Exit state of a finished child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitState {
    pub success: bool,
    /// Exit code; `None` when the child was killed by a signal.
    pub code: Option<i32>,
}

impl ExitState {
    pub fn ok() -> Self {
        Self {
            success: true,
            code: Some(0),
        }
    }
}

/// Captured output of a child process run with piped stdin/stdout.
#[derive(Debug, Clone)]
pub struct Capture {
    pub stdout: Vec<u8>,
    pub status: ExitState,
}

/// Capability for spawning external tools.
pub trait ProcessLauncher {
    /// Run a command with `stdin_bytes` piped to its stdin and its stdout
    /// captured. Stderr is inherited so full-screen tools can draw on it.
    fn run_captured(&self, command: &str, args: &[String], stdin_bytes: &[u8]) -> Result<Capture>;

    /// Run a command with all three standard streams inherited, blocking
    /// until it exits.
    fn run_interactive(&self, command: &str, args: &[String]) -> Result<ExitState>;
}

/// Real launcher backed by [`std::process::Command`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLauncher;

impl ProcessLauncher for SystemLauncher {
    fn run_captured(&self, command: &str, args: &[String], stdin_bytes: &[u8]) -> Result<Capture> {
        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|source| NoteError::Launch {
                command: command.to_string(),
                source,
            })?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(stdin_bytes)?;
        }

        let output = child.wait_with_output()?;

        Ok(Capture {
            stdout: output.stdout,
            status: ExitState {
                success: output.status.success(),
                code: output.status.code(),
            },
        })
    }

    fn run_interactive(&self, command: &str, args: &[String]) -> Result<ExitState> {
        let status = Command::new(command)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| NoteError::Launch {
                command: command.to_string(),
                source,
            })?;

        Ok(ExitState {
            success: status.success(),
            code: status.code(),
        })
    }
}

/// The two external tools every operation shares.
#[derive(Debug, Clone)]
pub struct Toolbox<L> {
    pub launcher: L,
    pub editor_cmd: String,
    pub selector_cmd: String,
}

impl<L: ProcessLauncher> Toolbox<L> {
    pub fn new(launcher: L, editor_cmd: impl Into<String>, selector_cmd: impl Into<String>) -> Self {
        Self {
            launcher,
            editor_cmd: editor_cmd.into(),
            selector_cmd: selector_cmd.into(),
        }
    }

    /// Open a file in the configured editor, blocking until it exits.
    ///
    /// The editor inherits the terminal, so the session is fully
    /// interactive. A non-zero exit is an error for the caller to report.
    pub fn open_in_editor(&self, path: &Path) -> Result<()> {
        let args = vec![path.to_string_lossy().to_string()];
        let status = self.launcher.run_interactive(&self.editor_cmd, &args)?;

        if !status.success {
            return Err(NoteError::ToolFailed {
                command: self.editor_cmd.clone(),
                code: status.code,
            });
        }

        Ok(())
    }
}
