//! Configuration file discovery, loading, and validation.

use crate::config::schema::InstallerConfig;
use crate::dependency::builtin;
use crate::error::{PeridotError, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked for in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "peridot.yml";

/// Find the config file for `dir`, if one exists.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    let path = dir.join(DEFAULT_CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Load configuration.
///
/// An explicit path must exist. Without one, `peridot.yml` in `dir` is used
/// when present and defaults apply otherwise.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<InstallerConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match discover_config(dir) {
            Some(path) => path,
            None => {
                tracing::debug!(dir = %dir.display(), "no config file, using defaults");
                return Ok(InstallerConfig::default());
            }
        },
    };
    load_config_file(&path)
}

/// Load and validate a config file.
pub fn load_config_file(path: &Path) -> Result<InstallerConfig> {
    if !path.exists() {
        return Err(PeridotError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content, path)?;
    validate(&config)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parse YAML config content. `path` is only used in error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<InstallerConfig> {
    if content.trim().is_empty() {
        return Ok(InstallerConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| PeridotError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Check references and names in a parsed config.
pub fn validate(config: &InstallerConfig) -> Result<()> {
    if let Some(keys) = &config.dependencies {
        for key in keys {
            if builtin::lookup(key).is_none() {
                return Err(PeridotError::UnknownDependency { name: key.clone() });
            }
        }
    }

    let mut seen = HashSet::new();
    for custom in &config.custom {
        let name = custom.name.trim();
        if name.is_empty() {
            return Err(PeridotError::ConfigValidationError {
                message: "custom dependency with an empty name".to_string(),
            });
        }
        if !seen.insert(name) {
            return Err(PeridotError::ConfigValidationError {
                message: format!("custom dependency '{}' is declared twice", name),
            });
        }
    }
    Ok(())
}
