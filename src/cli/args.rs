//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Peridot - checks that build prerequisites are installed.
#[derive(Debug, Parser)]
#[command(name = "peridot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./peridot.yml)
    #[arg(short, long, global = true, env = "PERIDOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Never wait for Enter
    #[arg(long, global = true, env = "PERIDOT_AUTO")]
    pub auto: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check required software (default if no command specified)
    Check(CheckArgs),

    /// Show what was detected about this machine
    Platform(PlatformArgs),

    /// List known dependencies
    List,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Dependencies to check (builtin keys or custom names); all when omitted
    pub names: Vec<String>,
}

/// Arguments for the `platform` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PlatformArgs {
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}
