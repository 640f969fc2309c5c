//! Peridot CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use peridot::cli::{Cli, CommandDispatcher};
use peridot::config::load_config;
use peridot::platform::Platform;
use peridot::ui::{Console, PeridotTheme, TerminalConsole};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is WARN
///
/// Logs go to stderr so they stay out of the installer's output.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("peridot=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("peridot=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Peridot starting with args: {:?}", cli);

    let cwd = std::env::current_dir().unwrap_or_default();
    let loaded = load_config(cli.config.as_deref(), &cwd);

    let no_color = cli.no_color || loaded.as_ref().is_ok_and(|c| c.no_color);
    let theme = if no_color {
        PeridotTheme::plain()
    } else {
        PeridotTheme::detect()
    };
    let auto = cli.auto || loaded.as_ref().is_ok_and(|c| c.auto);
    let mut console = TerminalConsole::new(theme, auto);

    let result = loaded.and_then(|config| {
        let dispatcher = CommandDispatcher::new(config, Arc::new(Platform::detect()));
        dispatcher.dispatch(&cli, &mut console)
    });

    match result {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            console.error(&format!("Error: {}", e));
            console.reset_terminal_colors();
            ExitCode::from(1)
        }
    }
}
