//! Fuzzy-selector invocation.
//!
//! Builds the argument list for an fzf-style selector, feeds it the
//! candidate lines on stdin, and parses the captured selection(s).

use crate::error::{NoteError, Result};
use crate::launcher::ProcessLauncher;

/// One configured selector invocation.
#[derive(Debug, Clone)]
pub struct Selector<'a> {
    command: &'a str,
    prompt: Option<String>,
    multi: bool,
    height: Option<u32>,
    preview: Option<String>,
    preview_window: Option<String>,
}

impl<'a> Selector<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            command,
            prompt: None,
            multi: false,
            height: None,
            preview: None,
            preview_window: None,
        }
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn multi(mut self) -> Self {
        self.multi = true;
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Preview command template; `{}` is substituted with the highlighted
    /// candidate by the selector itself.
    pub fn preview(mut self, template: impl Into<String>, window: impl Into<String>) -> Self {
        self.preview = Some(template.into());
        self.preview_window = Some(window.into());
        self
    }

    /// Argument vector in the order fzf expects.
    pub fn args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(ref prompt) = self.prompt {
            args.push(format!("--prompt={}", prompt));
        }
        if self.multi {
            args.push("--multi".to_string());
        }
        if let Some(height) = self.height {
            args.push(format!("--height={}", height));
        }
        if let Some(ref preview) = self.preview {
            args.push("--preview".to_string());
            args.push(preview.clone());
        }
        if let Some(ref window) = self.preview_window {
            args.push(format!("--preview-window={}", window));
        }

        args
    }

    /// Run the selector over `candidates` and return the selected lines.
    ///
    /// Candidates are newline-joined on the child's stdin; captured stdout
    /// is split back into trimmed, non-empty lines, so a multi-selection
    /// yields one entry per selected candidate. A non-zero exit (including
    /// the user cancelling) is an error.
    pub fn pick<L: ProcessLauncher>(
        &self,
        launcher: &L,
        candidates: &[String],
    ) -> Result<Vec<String>> {
        let input = candidates.join("\n");
        let capture = launcher.run_captured(self.command, &self.args(), input.as_bytes())?;

        if !capture.status.success {
            return Err(NoteError::ToolFailed {
                command: self.command.to_string(),
                code: capture.status.code,
            });
        }

        let stdout = String::from_utf8_lossy(&capture.stdout);
        Ok(stdout
            .lines()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }
}
