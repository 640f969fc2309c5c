//! List command implementation.
//!
//! The `peridot list` command lists builtin and configured dependencies
//! without checking them.

use std::sync::Arc;

use crate::config::InstallerConfig;
use crate::dependency::{custom, Dependency, CATALOG};
use crate::error::Result;
use crate::platform::Platform;
use crate::ui::Console;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    config: &'a InstallerConfig,
    platform: Arc<Platform>,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(config: &'a InstallerConfig, platform: Arc<Platform>) -> Self {
        Self { config, platform }
    }

    fn is_selected(&self, key: &str) -> bool {
        match &self.config.dependencies {
            Some(keys) => keys.iter().any(|k| k == key),
            None => true,
        }
    }
}

fn print_entry(console: &mut dyn Console, label: &str, dep: &Dependency, selected: bool) {
    let marker = if selected { "" } else { " (not checked)" };
    console.color_puts(&format!(" * <b>{}</b> - {}{}", label, dep.name(), marker));
    if let Some(command) = dep.install_command() {
        console.color_puts(&format!("     install: {}", command));
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, console: &mut dyn Console) -> Result<CommandResult> {
        console.color_puts("<banner>Builtin dependencies</banner>");
        for entry in CATALOG {
            let dep = entry.dependency(Arc::clone(&self.platform));
            print_entry(console, entry.key, &dep, self.is_selected(entry.key));
        }

        if !self.config.custom.is_empty() {
            console.write_raw("\n");
            console.color_puts("<banner>Custom dependencies</banner>");
            for entry in &self.config.custom {
                let dep = custom::from_config(entry, Arc::clone(&self.platform));
                print_entry(console, entry.name.trim(), &dep, true);
            }
        }
        Ok(CommandResult::success())
    }
}
