//! Platform command implementation.
//!
//! The `peridot platform` command prints what was detected about this
//! machine.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use serde::Serialize;

use crate::cli::args::PlatformArgs;
use crate::error::Result;
use crate::platform::{parse_system_path, LinuxDistro, Os, Platform};
use crate::ui::{Console, ConsoleTextTemplate};

use super::dispatcher::{Command, CommandResult};

const SUMMARY: &str = "\
<banner>Platform</banner>
 * Operating system: <b>{{os}}</b>
 * Linux distribution: <b>{{distro}}</b>
 * Package manager: <b>{{package_manager}}</b>
 * Library extension: <b>{{library_extension}}</b>";

/// Serializable snapshot of a detected platform.
#[derive(Debug, Serialize)]
pub struct PlatformReport {
    pub os: Os,
    pub linux_distro: Option<LinuxDistro>,
    pub package_manager: Option<&'static str>,
    pub library_extension: &'static str,
    pub search_path: Vec<PathBuf>,
}

impl PlatformReport {
    /// Describe `platform` and the current `PATH`.
    pub fn collect(platform: &Platform) -> Self {
        Self {
            os: platform.os(),
            linux_distro: platform.linux_distro(),
            package_manager: platform.package_manager().map(|m| m.program()),
            library_extension: platform.library_extension(),
            search_path: parse_system_path(),
        }
    }

    fn template(&self) -> ConsoleTextTemplate {
        ConsoleTextTemplate::new(SUMMARY)
            .with_var("os", self.os.name())
            .with_var("distro", self.linux_distro.map_or("none", |d| d.tag()))
            .with_var("package_manager", self.package_manager.unwrap_or("none"))
            .with_var("library_extension", self.library_extension)
    }
}

/// The platform command implementation.
pub struct PlatformCommand {
    platform: Arc<Platform>,
    args: PlatformArgs,
}

impl PlatformCommand {
    /// Create a new platform command.
    pub fn new(platform: Arc<Platform>, args: PlatformArgs) -> Self {
        Self { platform, args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &PlatformArgs {
        &self.args
    }
}

impl Command for PlatformCommand {
    fn execute(&self, console: &mut dyn Console) -> Result<CommandResult> {
        let report = PlatformReport::collect(&self.platform);
        if self.args.json {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize platform report")?;
            console.write_raw(&format!("{}\n", json));
        } else {
            console.render_template(&report.template());
        }
        Ok(CommandResult::success())
    }
}
