//! Installer configuration.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading, and validation in [`loader`]
//!
//! # Example
//!
//! ```
//! use peridot::config::{load_config, DEFAULT_CONFIG_FILE};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "auto: true\ndependencies: [make]\n").unwrap();
//!
//! let config = load_config(None, temp.path()).unwrap();
//! assert!(config.auto);
//! assert_eq!(config.dependencies, Some(vec!["make".to_string()]));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    discover_config, load_config, load_config_file, parse_config, validate, DEFAULT_CONFIG_FILE,
};
pub use schema::{CustomCheck, CustomDependency, InstallerConfig, PackageNames};
