//! reia-bootstrap CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use reia_bootstrap::app;
use reia_bootstrap::cli::Cli;
use reia_bootstrap::config::Settings;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level comes from `RUST_LOG` when set, otherwise warnings only.
/// Logs go to stderr so they never land inside the menu.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("reia_bootstrap=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::debug!("reia-bootstrap starting with args: {:?}", cli);

    let settings = Settings::from_env();
    match app::launch(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error running program: {}", e);
            ExitCode::from(1)
        }
    }
}
