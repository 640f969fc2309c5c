//! Installer driver.
//!
//! Walks a list of dependencies, reports which are present, and tells the
//! user how to install the rest. It never installs anything itself.
//!
//! # Example
//!
//! ```
//! use peridot::dependency::{CheckResult, Dependency};
//! use peridot::installer::Installer;
//! use peridot::ui::MockConsole;
//!
//! let installer = Installer::new(vec![Dependency::new(|dep| {
//!     dep.name = "Make".to_string();
//!     dep.define_checker(|| CheckResult::Found);
//! })]);
//!
//! let mut console = MockConsole::new();
//! assert!(installer.start(&mut console).unwrap());
//! assert!(console.output().contains("* Make... found"));
//! ```

use crate::dependency::{CheckResult, Dependency};
use crate::error::Result;
use crate::ui::Console;
use serde::Serialize;

/// Result of checking one dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyStatus {
    pub name: String,
    pub result: CheckResult,
}

/// Results of a full dependency check, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
    pub statuses: Vec<DependencyStatus>,
}

impl DependencyReport {
    /// Whether every dependency was found.
    pub fn all_found(&self) -> bool {
        self.statuses.iter().all(|s| s.result.is_found())
    }

    /// Names of dependencies that were not found.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.statuses
            .iter()
            .filter(|s| !s.result.is_found())
            .map(|s| s.name.as_str())
    }
}

/// Checks dependencies and prints remediation for missing ones.
#[derive(Debug, Default)]
pub struct Installer {
    dependencies: Vec<Dependency>,
}

impl Installer {
    /// Create an installer that checks `dependencies` in order.
    pub fn new(dependencies: Vec<Dependency>) -> Self {
        Self { dependencies }
    }

    /// The dependencies this installer checks.
    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    /// Run the installer: check dependencies, then reset terminal colors.
    ///
    /// Returns whether every dependency was found. Colors are reset even when
    /// the check fails with an error.
    pub fn start(&self, console: &mut dyn Console) -> Result<bool> {
        let result = self.check_dependencies(console);
        console.reset_terminal_colors();
        result.map(|report| report.all_found())
    }

    /// Check every dependency and print status lines.
    ///
    /// When something is missing, asks the user to continue and then prints
    /// installation instructions for the missing dependencies only.
    pub fn check_dependencies(&self, console: &mut dyn Console) -> Result<DependencyReport> {
        console.new_screen();
        console.color_puts("<banner>Checking for required software...</banner>");
        console.write_raw("\n");

        let mut report = DependencyReport::default();
        let mut missing: Vec<&Dependency> = Vec::new();
        for dep in &self.dependencies {
            console.color_print(&format!(" * {}... ", dep.name()));
            let result = dep.check();
            match &result {
                CheckResult::FoundAt(path) => {
                    console.color_puts(&format!("<green>found at {}</green>", path.display()))
                }
                CheckResult::Found => console.color_puts("<green>found</green>"),
                CheckResult::NotFound => {
                    console.color_puts("<red>not found</red>");
                    missing.push(dep);
                }
            }
            report.statuses.push(DependencyStatus {
                name: dep.name().to_string(),
                result,
            });
        }

        if missing.is_empty() {
            tracing::info!(count = report.statuses.len(), "all dependencies found");
            return Ok(report);
        }

        tracing::info!(missing = missing.len(), "dependencies missing");
        console.write_raw("\n");
        console.color_puts("<red>Some required software is not installed.</red>");
        console.color_puts("But don't worry, this installer will tell you how to install them.\n");
        console.continue_or_not()?;

        console.line();
        console.write_raw("\n");
        console.color_puts("<banner>Installation instructions for required software</banner>");
        console.write_raw("\n");
        for dep in missing {
            print_installation_instructions(console, dep);
            console.write_raw("\n");
        }
        Ok(report)
    }
}

/// Print how to install `dep`, using the most specific information it has.
pub fn print_installation_instructions(console: &mut dyn Console, dep: &Dependency) {
    console.color_puts(&format!(" * To install <yellow>{}</yellow>:", dep.name()));
    if let Some(command) = dep.install_command() {
        console.color_puts(&format!("   Please run <b>{}</b> as root.", command));
        if let Some(comments) = dep.install_comments() {
            console.color_puts(&format!("   ({})", comments));
        }
    } else if let Some(instructions) = dep.install_instructions() {
        console.color_puts(&format!("   {}", instructions));
    } else if let Some(website) = dep.website() {
        console.color_puts(&format!("   Please download it from <b>{}</b>", website));
        if let Some(comments) = dep.website_comments() {
            console.color_puts(&format!("   ({})", comments));
        }
    } else {
        console.color_puts("   Search Google.");
    }
}
