//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::sync::Arc;

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::config::InstallerConfig;
use crate::error::Result;
use crate::platform::Platform;
use crate::ui::Console;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `console` - Console for displaying output and waiting on the user
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, console: &mut dyn Console) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: InstallerConfig,
    platform: Arc<Platform>,
}

impl CommandDispatcher {
    /// Create a new dispatcher for a loaded configuration and platform.
    pub fn new(config: InstallerConfig, platform: Arc<Platform>) -> Self {
        Self { config, platform }
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &InstallerConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, console: &mut dyn Console) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => self.check(args.clone()).execute(console),
            Some(Commands::Platform(args)) => {
                let cmd = super::platform::PlatformCommand::new(
                    Arc::clone(&self.platform),
                    args.clone(),
                );
                cmd.execute(console)
            }
            Some(Commands::List) => {
                let cmd = super::list::ListCommand::new(&self.config, Arc::clone(&self.platform));
                cmd.execute(console)
            }
            None => self.check(CheckArgs::default()).execute(console),
        }
    }

    fn check(&self, args: CheckArgs) -> super::check::CheckCommand<'_> {
        super::check::CheckCommand::new(&self.config, Arc::clone(&self.platform), args)
    }
}
