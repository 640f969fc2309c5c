//! Shell command execution.

pub mod command;
pub mod signal;

pub use command::{command_succeeds, sh, shell_succeeds};
pub use signal::InterruptGuard;
