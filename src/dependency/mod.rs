//! Dependency descriptors and the builtin catalog.
//!
//! - [`Dependency`] - a lazily initialized descriptor with a checker
//! - [`CheckResult`] - what a checker found
//! - [`builtin`] - autotools, git, make, and common C libraries
//! - [`custom`] - descriptors declared in configuration
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use peridot::dependency::builtin;
//! use peridot::platform::{Os, Platform};
//!
//! let platform = Arc::new(Platform::with_root("/nonexistent", Os::MacOS));
//! let git = builtin::by_key("git", &platform).unwrap();
//! assert_eq!(git.name(), "Git revision control system");
//! assert_eq!(git.install_command(), None);
//! ```

pub mod builtin;
pub mod custom;
pub mod descriptor;
pub mod result;

pub use builtin::{BuiltinDependency, CATALOG};
pub use descriptor::{Checker, Dependency, DependencySpec};
pub use result::CheckResult;

use crate::config::InstallerConfig;
use crate::error::{PeridotError, Result};
use crate::platform::Platform;
use std::sync::Arc;

/// Resolve the descriptors an installer run should check.
///
/// With explicit `names`, each must be a builtin key or a custom dependency
/// name, and the result follows their order. Without names, the configured
/// builtin selection (or the whole catalog) comes first, then every custom
/// dependency.
pub fn select(
    names: &[String],
    config: &InstallerConfig,
    platform: &Arc<Platform>,
) -> Result<Vec<Dependency>> {
    if !names.is_empty() {
        return names
            .iter()
            .map(|name| {
                if let Some(dep) = builtin::by_key(name, platform) {
                    return Ok(dep);
                }
                config
                    .custom
                    .iter()
                    .find(|c| c.name.trim() == name.as_str())
                    .map(|c| custom::from_config(c, Arc::clone(platform)))
                    .ok_or_else(|| PeridotError::UnknownDependency { name: name.clone() })
            })
            .collect();
    }

    let mut deps = match &config.dependencies {
        Some(keys) => keys
            .iter()
            .map(|key| {
                builtin::by_key(key, platform)
                    .ok_or_else(|| PeridotError::UnknownDependency { name: key.clone() })
            })
            .collect::<Result<Vec<_>>>()?,
        None => builtin::all(platform),
    };
    deps.extend(
        config
            .custom
            .iter()
            .map(|c| custom::from_config(c, Arc::clone(platform))),
    );
    Ok(deps)
}
