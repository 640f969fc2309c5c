//! Peridot - build prerequisite checker.
//!
//! Peridot checks that the tools and libraries a source build needs are
//! present, and tells the user how to install whatever is missing using the
//! package manager of their Linux distribution.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`dependency`] - Dependency descriptors and the builtin catalog
//! - [`error`] - Error types and result aliases
//! - [`installer`] - The check-and-instruct driver
//! - [`platform`] - OS, distribution, and `PATH` lookups
//! - [`shell`] - External command execution
//! - [`ui`] - Console markup, prompts, and waits
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use peridot::dependency::builtin;
//! use peridot::installer::Installer;
//! use peridot::platform::{Os, Platform};
//! use peridot::ui::MockConsole;
//!
//! let platform = Arc::new(Platform::with_root("/nonexistent", Os::MacOS));
//! let installer = Installer::new(builtin::all(&platform));
//!
//! let mut console = MockConsole::new();
//! console.set_auto(true);
//! installer.start(&mut console).unwrap();
//! assert!(console.output().contains(" * GNU Automake... "));
//! ```

pub mod cli;
pub mod config;
pub mod dependency;
pub mod error;
pub mod installer;
pub mod platform;
pub mod shell;
pub mod ui;

pub use error::{PeridotError, Result};
