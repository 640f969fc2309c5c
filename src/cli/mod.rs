//! Command-line interface for Peridot.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{CheckArgs, Cli, Commands, PlatformArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
