//! User messaging and line reads for the interactive session.

use crate::error::Result;
use std::cell::RefCell;
use std::io::{self, BufRead, Write};

/// Helper for printing status messages, errors, and prompts.
///
/// Everything goes to stdout, matching the interactive nature of the tool;
/// only the fatal startup diagnostic in `main` uses stderr. Quiet mode
/// suppresses status lines but never errors or prompts.
pub struct Output {
    quiet: bool,
    sink: RefCell<Box<dyn Write>>,
}

impl Output {
    pub fn new(quiet: bool) -> Self {
        Self::with_sink(quiet, Box::new(io::stdout()))
    }

    /// Build an output writing to `sink` instead of stdout.
    pub fn with_sink(quiet: bool, sink: Box<dyn Write>) -> Self {
        Self {
            quiet,
            sink: RefCell::new(sink),
        }
    }

    /// Print a status line unless in quiet mode.
    pub fn status(&self, message: &str) {
        if !self.quiet {
            self.write_line(message);
        }
    }

    /// Print an error line. Shown even in quiet mode.
    pub fn error(&self, message: &str) {
        self.write_line(message);
    }

    /// Print a prompt without a trailing newline. Always shown, even in
    /// quiet mode, since the program waits for a reply.
    pub fn prompt(&self, message: &str) {
        let mut sink = self.sink.borrow_mut();
        let _ = write!(sink, "{}", message);
        let _ = sink.flush();
    }

    fn write_line(&self, message: &str) {
        let _ = writeln!(self.sink.borrow_mut(), "{}", message);
    }
}

/// Read one line from `input`, stripping the trailing newline.
pub fn read_line(input: &mut dyn BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(line)
}
