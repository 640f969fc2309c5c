//! Configuration schema.

use serde::{Deserialize, Serialize};

/// Installer configuration, as read from `peridot.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerConfig {
    /// Never wait for the user; "press Enter to continue" returns at once.
    #[serde(skip_serializing_if = "is_false")]
    pub auto: bool,

    /// Disable colored output.
    #[serde(skip_serializing_if = "is_false")]
    pub no_color: bool,

    /// Builtin dependency keys to check. `None` checks the whole catalog,
    /// an empty list checks none of it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,

    /// Project-specific dependencies.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub custom: Vec<CustomDependency>,
}

/// A dependency declared in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CustomDependency {
    /// Display name, also used to select it from the command line.
    pub name: String,

    /// How to detect it.
    pub check: CustomCheck,

    /// Package names per package manager, turned into an install command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<PackageNames>,

    /// Explicit install command; wins over `packages`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_command: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_instructions: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_comments: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_comments: Option<String>,
}

/// Detection method for a custom dependency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CustomCheck {
    /// Executable on `PATH`.
    Command {
        /// Executable name
        command: String,
    },

    /// Module known to `pkg-config`.
    PkgConfig {
        /// pkg-config module name
        package: String,
    },

    /// Shell command line that exits 0 when the dependency is present.
    CommandSucceeds {
        /// Command line run through `sh -c`
        command: String,
    },
}

/// Per-package-manager package names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageNames {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yum: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}
