//! Terminal presentation.
//!
//! This module provides:
//! - [`Theme`] and [`StatusKind`] for colors and glyphs
//! - [`render`] functions that turn state into frames
//! - [`TerminalFrontend`] for drawing on a real terminal
//! - [`ProgressSpinner`] for the detection phase
//!
//! # Example
//!
//! ```
//! use reia_bootstrap::ui::render::checkbox;
//! use reia_bootstrap::ui::Theme;
//!
//! let theme = Theme::plain();
//! assert_eq!(checkbox(&theme, "Rust", true), "[x] Rust");
//! assert_eq!(checkbox(&theme, "Zig (wip)", false), "[ ] Zig (wip)");
//! ```

pub mod icons;
pub mod render;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use icons::StatusKind;
pub use spinner::ProgressSpinner;
pub use terminal::{KeyEvents, TerminalFrontend};
pub use theme::Theme;
