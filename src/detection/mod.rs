//! Toolchain detection.
//!
//! Detection runs once at startup, before the menu is shown. Each
//! toolchain in the catalog is probed by running its executable with a
//! version flag; the outcome is frozen into a [`ToolStatus`].
//!
//! # Modules
//!
//! - [`runner`] - The command existence checker and its process-backed implementation
//! - [`version`] - Version extraction and comparison
//! - [`status`] - Immutable per-tool detection results
//! - [`detector`] - Runs every probe in the catalog
//! - [`mock`] - Scripted runner for tests
//!
//! # Example
//!
//! ```
//! use reia_bootstrap::config::catalog;
//! use reia_bootstrap::detection::{Detector, MockRunner};
//!
//! let runner = MockRunner::new().with_success("git", "--version", "git version 2.45.0");
//! let mut detector = Detector::new(runner);
//! let statuses = detector.detect_all(catalog());
//!
//! assert!(statuses[0].installed());
//! assert!(!statuses[1].installed());
//! ```

pub mod detector;
pub mod mock;
pub mod runner;
pub mod status;
pub mod version;

pub use detector::Detector;
pub use mock::MockRunner;
pub use runner::{CommandRunner, ProbeError, SystemRunner, VERSION_FLAGS};
pub use status::{SubCheckStatus, ToolStatus};
pub use version::{compare_versions, extract_version};
