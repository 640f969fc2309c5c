//! Error types for Peridot operations.
//!
//! This module defines [`PeridotError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A missing dependency is not an error; it is a
//!   [`CheckResult::NotFound`](crate::dependency::CheckResult::NotFound)
//! - A failed external command is a `false` return, except when the child was
//!   killed by Ctrl-C, which surfaces as [`PeridotError::Interrupted`]
//! - Use `anyhow::Error` (via `PeridotError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Peridot operations.
#[derive(Debug, Error)]
pub enum PeridotError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Referenced dependency is neither builtin nor declared in config.
    #[error("Unknown dependency: {name}")]
    UnknownDependency { name: String },

    /// Standard input reached end-of-file while waiting for an answer.
    #[error("Input stream closed")]
    InputClosed,

    /// The user pressed Ctrl-C during a read or while a command was running.
    #[error("Interrupted")]
    Interrupted,

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PeridotError {
    /// Whether this error means the user abandoned an interactive read.
    pub fn is_input_abort(&self) -> bool {
        matches!(self, PeridotError::InputClosed | PeridotError::Interrupted)
    }
}

/// Result type alias for Peridot operations.
pub type Result<T> = std::result::Result<T, PeridotError>;
