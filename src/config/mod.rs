//! Static configuration.
//!
//! There are no configuration files. The set of monitored toolchains is a
//! compiled-in catalog, and the few runtime switches (colors, interactivity)
//! are derived from the environment.
//!
//! # Modules
//!
//! - [`catalog`] - The monitored toolchains and their sub-checks
//! - [`settings`] - Environment-derived runtime settings

pub mod catalog;
pub mod settings;

pub use catalog::{catalog, SubCheckSpec, Tier, ToolSpec, MIN_RUST_VERSION};
pub use settings::{Settings, TICK_RATE};
