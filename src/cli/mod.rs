//! Interactive CLI: argument parsing, user messaging, menu operations.

pub mod args;
pub mod output;

pub mod create;
pub mod delete;
pub mod menu;
pub mod search;

pub use args::Cli;
pub use output::Output;

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted launcher shared by the operation tests.

    use crate::cli::output::Output;
    use crate::error::Result;
    use crate::launcher::{Capture, ExitState, ProcessLauncher};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::io::Write;
    use std::rc::Rc;

    /// Growable buffer that can be handed to [`Output::with_sink`] while
    /// the test keeps a handle for assertions.
    #[derive(Clone, Default)]
    pub struct SharedSink(Rc<RefCell<Vec<u8>>>);

    impl SharedSink {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).to_string()
        }
    }

    impl Write for SharedSink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    /// An [`Output`] writing into a [`SharedSink`] instead of stdout.
    pub fn captured_output(quiet: bool) -> (Output, SharedSink) {
        let sink = SharedSink::default();
        let output = Output::with_sink(quiet, Box::new(sink.clone()));
        (output, sink)
    }

    /// In-memory stand-in for the real launcher. Selector invocations pop
    /// queued replies; editor invocations succeed unless a failure was
    /// queued. Every call is recorded for assertions.
    #[derive(Default)]
    pub struct ScriptedLauncher {
        selector_replies: RefCell<VecDeque<Capture>>,
        editor_replies: RefCell<VecDeque<ExitState>>,
        pub selector_calls: RefCell<Vec<(String, Vec<String>, String)>>,
        pub editor_calls: RefCell<Vec<(String, Vec<String>)>>,
    }

    impl ScriptedLauncher {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a successful selector reply with the given stdout.
        pub fn push_selection(&self, stdout: &str) {
            self.selector_replies.borrow_mut().push_back(Capture {
                stdout: stdout.as_bytes().to_vec(),
                status: ExitState::ok(),
            });
        }

        /// Queue a selector exit with a non-zero code.
        pub fn push_selector_failure(&self, code: i32) {
            self.selector_replies.borrow_mut().push_back(Capture {
                stdout: Vec::new(),
                status: ExitState {
                    success: false,
                    code: Some(code),
                },
            });
        }

        /// Queue an editor exit with a non-zero code.
        pub fn push_editor_failure(&self, code: i32) {
            self.editor_replies.borrow_mut().push_back(ExitState {
                success: false,
                code: Some(code),
            });
        }

        pub fn selector_call_count(&self) -> usize {
            self.selector_calls.borrow().len()
        }

        /// Paths the editor was asked to open, in order.
        pub fn opened_paths(&self) -> Vec<String> {
            self.editor_calls
                .borrow()
                .iter()
                .filter_map(|(_, args)| args.first().cloned())
                .collect()
        }
    }

    impl ProcessLauncher for ScriptedLauncher {
        fn run_captured(
            &self,
            command: &str,
            args: &[String],
            stdin_bytes: &[u8],
        ) -> Result<Capture> {
            self.selector_calls.borrow_mut().push((
                command.to_string(),
                args.to_vec(),
                String::from_utf8_lossy(stdin_bytes).to_string(),
            ));
            match self.selector_replies.borrow_mut().pop_front() {
                Some(reply) => Ok(reply),
                None => panic!("unexpected selector invocation"),
            }
        }

        fn run_interactive(&self, command: &str, args: &[String]) -> Result<ExitState> {
            self.editor_calls
                .borrow_mut()
                .push((command.to_string(), args.to_vec()));
            Ok(self
                .editor_replies
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(ExitState::ok))
        }
    }
}
