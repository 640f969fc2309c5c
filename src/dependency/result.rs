//! Outcome of a single dependency check.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// What a checker found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum CheckResult {
    /// The dependency is absent.
    NotFound,
    /// The dependency is present but has no single location (e.g. a
    /// `pkg-config` module).
    Found,
    /// The dependency is present at this path.
    FoundAt(PathBuf),
}

impl CheckResult {
    /// Map an optional location to a result.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => CheckResult::FoundAt(path),
            None => CheckResult::NotFound,
        }
    }

    /// Map a check's success flag to a result with no location.
    pub fn from_success(found: bool) -> Self {
        if found {
            CheckResult::Found
        } else {
            CheckResult::NotFound
        }
    }

    /// Whether the dependency is present.
    pub fn is_found(&self) -> bool {
        !matches!(self, CheckResult::NotFound)
    }

    /// Where the dependency was found, if a location is known.
    pub fn found_at(&self) -> Option<&Path> {
        match self {
            CheckResult::FoundAt(path) => Some(path),
            _ => None,
        }
    }
}
