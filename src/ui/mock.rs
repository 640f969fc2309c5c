//! Mock console implementation for testing.
//!
//! `MockConsole` implements the `Console` trait and captures everything
//! written for later assertion. Prompt answers are queued up front; once the
//! queue is empty, prompts and waits behave as if stdin were closed.
//!
//! # Example
//!
//! ```
//! use peridot::ui::{Console, MockConsole};
//!
//! let mut console = MockConsole::new();
//! console.queue_input(&["", "8080"]);
//!
//! let is_port = |s: &str| s.parse::<u16>().is_ok();
//! let port = console.prompt("Port", Some(&is_port)).unwrap();
//!
//! assert_eq!(port, "8080");
//! assert_eq!(console.prompts_shown(), ["Port", "Port"]);
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use crate::error::{PeridotError, Result};

use super::{render_markup, Console, PeridotTheme, Validator, RESET};

/// Mock console for tests.
#[derive(Debug)]
pub struct MockConsole {
    theme: PeridotTheme,
    auto: bool,
    output: String,
    input: VecDeque<String>,
    prompts_shown: Vec<String>,
    waits: Vec<Option<Duration>>,
    resets: usize,
}

impl Default for MockConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConsole {
    /// Create a mock with the plain theme, so captured output has no ANSI codes.
    pub fn new() -> Self {
        Self::with_theme(PeridotTheme::plain())
    }

    /// Create a mock rendering with a specific theme.
    pub fn with_theme(theme: PeridotTheme) -> Self {
        Self {
            theme,
            auto: false,
            output: String::new(),
            input: VecDeque::new(),
            prompts_shown: Vec::new(),
            waits: Vec::new(),
            resets: 0,
        }
    }

    /// Set auto mode.
    pub fn set_auto(&mut self, auto: bool) {
        self.auto = auto;
    }

    /// Queue lines returned by later prompts and waits, in order.
    pub fn queue_input(&mut self, lines: &[&str]) {
        self.input.extend(lines.iter().map(|s| s.to_string()));
    }

    /// Everything written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Messages of every prompt attempt, including re-prompts.
    pub fn prompts_shown(&self) -> &[String] {
        &self.prompts_shown
    }

    /// Timeouts of every wait that actually waited.
    pub fn waits(&self) -> &[Option<Duration>] {
        &self.waits
    }

    /// How many times colors were reset.
    pub fn resets(&self) -> usize {
        self.resets
    }

    fn next_line(&mut self) -> Result<String> {
        self.input.pop_front().ok_or(PeridotError::InputClosed)
    }
}

impl Console for MockConsole {
    fn theme(&self) -> PeridotTheme {
        self.theme
    }

    fn write_raw(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn prompt(&mut self, message: &str, validate: Option<Validator<'_>>) -> Result<String> {
        loop {
            self.prompts_shown.push(message.to_string());
            let rendered = render_markup(&format!("{}: ", message), &self.theme);
            self.output.push_str(&rendered);

            let answer = self.next_line()?.trim().to_string();
            match validate {
                Some(validate) if !validate(&answer) => continue,
                _ => return Ok(answer),
            }
        }
    }

    fn wait(&mut self, timeout: Option<Duration>) -> Result<()> {
        if self.auto {
            return Ok(());
        }
        self.waits.push(timeout);
        match timeout {
            // A timed wait resumes even when nothing was typed.
            Some(_) => {
                self.input.pop_front();
                Ok(())
            }
            None => self.next_line().map(|_| ()),
        }
    }

    fn is_auto(&self) -> bool {
        self.auto
    }

    fn reset_terminal_colors(&mut self) {
        self.resets += 1;
        if self.theme.colors_enabled() {
            self.output.push_str(RESET);
        }
    }
}
