//! Check command implementation.
//!
//! The `peridot check` command checks required software and prints
//! installation instructions for whatever is missing.

use std::sync::Arc;

use crate::cli::args::CheckArgs;
use crate::config::InstallerConfig;
use crate::dependency;
use crate::error::Result;
use crate::installer::Installer;
use crate::platform::Platform;
use crate::ui::Console;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    config: &'a InstallerConfig,
    platform: Arc<Platform>,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(config: &'a InstallerConfig, platform: Arc<Platform>, args: CheckArgs) -> Self {
        Self {
            config,
            platform,
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, console: &mut dyn Console) -> Result<CommandResult> {
        let deps = dependency::select(&self.args.names, self.config, &self.platform)?;
        tracing::debug!(count = deps.len(), "checking dependencies");

        let installer = Installer::new(deps);
        if installer.start(console)? {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CustomCheck, CustomDependency};
    use crate::error::PeridotError;
    use crate::platform::Os;
    use crate::ui::MockConsole;

    fn custom(name: &str, command_line: &str) -> CustomDependency {
        CustomDependency {
            name: name.to_string(),
            check: CustomCheck::CommandSucceeds {
                command: command_line.to_string(),
            },
            packages: None,
            install_command: None,
            install_instructions: None,
            install_comments: None,
            website: Some("https://example.org/".to_string()),
            website_comments: None,
        }
    }

    fn platform() -> Arc<Platform> {
        Arc::new(Platform::with_root("/nonexistent", Os::Other))
    }

    #[cfg(unix)]
    #[test]
    fn missing_custom_dependency_fails_with_instructions() {
        let config = InstallerConfig {
            dependencies: Some(vec![]),
            custom: vec![custom("Present", "true"), custom("Absent", "false")],
            ..Default::default()
        };
        let cmd = CheckCommand::new(&config, platform(), CheckArgs::default());
        let mut console = MockConsole::new();
        console.set_auto(true);

        let result = cmd.execute(&mut console).unwrap();
        assert_eq!(result.exit_code, 1);
        let out = console.output();
        assert!(out.contains(" * Present... found\n"));
        assert!(out.contains(" * Absent... not found\n"));
        assert!(out.contains("Please download it from https://example.org/"));
        assert!(!out.contains("To install Present"));
    }

    #[cfg(unix)]
    #[test]
    fn selected_names_only() {
        let config = InstallerConfig {
            custom: vec![custom("Present", "true"), custom("Absent", "false")],
            ..Default::default()
        };
        let args = CheckArgs {
            names: vec!["Present".to_string()],
        };
        let cmd = CheckCommand::new(&config, platform(), args);
        let mut console = MockConsole::new();

        let result = cmd.execute(&mut console).unwrap();
        assert!(result.success);
        assert!(!console.output().contains("Absent"));
    }

    #[test]
    fn unknown_name_is_error() {
        let config = InstallerConfig::default();
        let args = CheckArgs {
            names: vec!["cobol".to_string()],
        };
        let cmd = CheckCommand::new(&config, platform(), args);
        let mut console = MockConsole::new();

        let err = cmd.execute(&mut console).unwrap_err();
        assert!(matches!(err, PeridotError::UnknownDependency { .. }));
        assert!(console.output().is_empty());
    }
}
