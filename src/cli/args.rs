//! CLI argument definitions.
//!
//! The menu takes no options; clap still provides `--help` and `--version`.

use clap::Parser;

/// reia-bootstrap - Interactive toolchain check for Reia development.
///
/// Use j/k or the arrow keys to move, enter to choose, q or esc to quit.
#[derive(Debug, Parser)]
#[command(name = "reia-bootstrap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {}
