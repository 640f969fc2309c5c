//! Descriptors declared in configuration.

use crate::config::{CustomCheck, CustomDependency};
use crate::dependency::descriptor::Dependency;
use crate::platform::{PackageManager, Platform};
use std::sync::Arc;

/// Build a lazily initialized descriptor from a config entry.
///
/// An explicit `install_command` wins; otherwise the package name for the
/// platform's package manager is turned into one.
pub fn from_config(custom: &CustomDependency, platform: Arc<Platform>) -> Dependency {
    let custom = custom.clone();
    Dependency::new(move |dep| {
        dep.name = custom.name.trim().to_string();
        match &custom.check {
            CustomCheck::Command { command } => dep.checks_command(command),
            CustomCheck::PkgConfig { package } => dep.checks_pkg_config(package),
            CustomCheck::CommandSucceeds { command } => dep.checks_shell(command),
        }
        dep.install_command = custom.install_command.clone().or_else(|| {
            let manager = platform.package_manager()?;
            let packages = custom.packages.as_ref()?;
            let package = match manager {
                PackageManager::Apt => packages.apt.as_deref(),
                PackageManager::Yum => packages.yum.as_deref(),
            }?;
            Some(manager.install_command(package))
        });
        dep.install_instructions = custom.install_instructions;
        dep.install_comments = custom.install_comments;
        dep.website = custom.website;
        dep.website_comments = custom.website_comments;
    })
}
