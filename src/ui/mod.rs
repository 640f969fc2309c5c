//! Console output and input for installers.
//!
//! This module provides:
//! - [`Console`] trait for UI abstraction
//! - [`TerminalConsole`] for the real terminal
//! - [`MockConsole`] for tests
//! - [`ConsoleTextTemplate`] markup rendering
//!
//! # Example
//!
//! ```
//! use peridot::ui::{Console, MockConsole};
//!
//! let mut console = MockConsole::new();
//! console.color_puts("<banner>Checking for required software...</banner>");
//! console.line();
//! assert!(console.output().starts_with("Checking for required software...\n"));
//! ```

pub mod mock;
pub mod prompts;
pub mod template;
pub mod terminal;
pub mod theme;

pub use mock::MockConsole;
pub use prompts::{read_prompt, Validator, INPUT_ABORTED_EXIT_CODE};
pub use template::{render_markup, ConsoleTextTemplate};
pub use terminal::TerminalConsole;
pub use theme::{should_use_colors, PeridotTheme, Tag, RESET};

use crate::error::Result;
use std::time::Duration;

/// Horizontal separator printed by [`Console::line`].
pub const SEPARATOR: &str = "--------------------------------------------";

/// Trait for console interactions.
///
/// Implementors supply raw output, prompting, and waiting; the markup helpers
/// are provided on top of those.
pub trait Console {
    /// The theme markup is rendered with.
    fn theme(&self) -> PeridotTheme;

    /// Write already-rendered text.
    fn write_raw(&mut self, text: &str);

    /// Ask for a line of input, re-asking until `validate` accepts it.
    fn prompt(&mut self, message: &str, validate: Option<Validator<'_>>) -> Result<String>;

    /// Wait for the user to press Enter, or until `timeout` elapses.
    ///
    /// Returns immediately in auto mode.
    fn wait(&mut self, timeout: Option<Duration>) -> Result<()>;

    /// Whether waits are skipped.
    fn is_auto(&self) -> bool;

    /// Clear any color attributes left active on the terminal.
    fn reset_terminal_colors(&mut self);

    /// Render markup and print it.
    fn color_print(&mut self, text: &str) {
        let rendered = render_markup(text, &self.theme());
        self.write_raw(&rendered);
    }

    /// Render markup and print it followed by a newline.
    fn color_puts(&mut self, text: &str) {
        self.color_print(&format!("{}\n", text));
    }

    /// Render a template and print it followed by a newline.
    fn render_template(&mut self, template: &ConsoleTextTemplate) {
        let rendered = template.render(&self.theme());
        self.write_raw(&format!("{}\n", rendered));
    }

    /// Print a separator line.
    fn line(&mut self) {
        self.write_raw(&format!("{}\n", SEPARATOR));
    }

    /// Blank line, separator, blank line.
    fn new_screen(&mut self) {
        self.write_raw("\n");
        self.line();
        self.write_raw("\n");
    }

    /// Print an error in red.
    fn error(&mut self, msg: &str) {
        self.color_puts(&format!("<red>{}</red>", msg));
    }

    /// Tell the user how to proceed and wait for Enter.
    fn continue_or_not(&mut self) -> Result<()> {
        self.color_puts("<b>Press Enter to continue, or Ctrl-C to abort.</b>");
        self.wait(None)
    }
}
