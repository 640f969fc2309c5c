//! Interactive terminal console.

use console::Term;
use std::io::Write;
use std::time::Duration;

use crate::error::Result;
use crate::shell::InterruptGuard;

use super::prompts::{read_prompt, wait_for_line, wait_for_stdin_line};
use super::{Console, PeridotTheme, Validator, INPUT_ABORTED_EXIT_CODE, RESET};

/// Console backed by stdout and stdin.
///
/// End-of-input or Ctrl-C while reading resets the terminal and exits the
/// process with [`INPUT_ABORTED_EXIT_CODE`].
pub struct TerminalConsole {
    term: Term,
    theme: PeridotTheme,
    auto: bool,
}

impl TerminalConsole {
    /// Create a terminal console.
    pub fn new(theme: PeridotTheme, auto: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme,
            auto,
        }
    }

    fn abort_on_input_loss<T>(&mut self, result: Result<T>) -> Result<T> {
        match result {
            Err(e) if e.is_input_abort() => {
                tracing::debug!(error = %e, "input aborted");
                self.reset_terminal_colors();
                writeln!(self.term).ok();
                std::process::exit(INPUT_ABORTED_EXIT_CODE);
            }
            other => other,
        }
    }
}

#[cfg(unix)]
fn stdin_reader() -> super::prompts::FdReader {
    super::prompts::FdReader::stdin()
}

#[cfg(not(unix))]
fn stdin_reader() -> std::io::StdinLock<'static> {
    std::io::stdin().lock()
}

impl Console for TerminalConsole {
    fn theme(&self) -> PeridotTheme {
        self.theme
    }

    fn write_raw(&mut self, text: &str) {
        self.term.write_all(text.as_bytes()).ok();
        self.term.flush().ok();
    }

    fn prompt(&mut self, message: &str, validate: Option<Validator<'_>>) -> Result<String> {
        let result = {
            let _guard = InterruptGuard::install();
            let mut input = stdin_reader();
            read_prompt(&mut input, &mut self.term, &self.theme, message, validate)
        };
        self.abort_on_input_loss(result)
    }

    fn wait(&mut self, timeout: Option<Duration>) -> Result<()> {
        if self.auto {
            return Ok(());
        }
        let result = {
            let _guard = InterruptGuard::install();
            match timeout {
                Some(timeout) => wait_for_stdin_line(timeout).map(|_| ()),
                None => wait_for_line(&mut stdin_reader()),
            }
        };
        self.abort_on_input_loss(result)
    }

    fn is_auto(&self) -> bool {
        self.auto
    }

    fn reset_terminal_colors(&mut self) {
        self.write_raw(RESET);
    }
}
