//! reia-bootstrap - Interactive toolchain check for Reia development.
//!
//! Probes the host for the toolchains the Reia project uses (Git and Git
//! LFS, Rust, Godot, Zig, Docker), then shows an interactive checklist of
//! what is installed.
//!
//! # Modules
//!
//! - [`app`] - The selection state machine and menu loop
//! - [`cli`] - Command-line argument parsing
//! - [`config`] - Tool catalog and environment-derived settings
//! - [`detection`] - Version probes and toolchain detection
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Theme, renderers and the terminal frontend
//!
//! # Example
//!
//! ```
//! use std::cmp::Ordering;
//! use reia_bootstrap::detection::compare_versions;
//!
//! assert_eq!(compare_versions("1.90.0", "1.88.0"), Ordering::Greater);
//! assert_eq!(compare_versions("1.2.0", "1.88.0"), Ordering::Less);
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod ui;

pub use error::{BootstrapError, Result};
