//! Visual theme and styling.

use console::Style;

use crate::config::Settings;

/// Styles used by the menu renderers.
///
/// The theme is plain data handed to the render functions; nothing reads
/// styles from global state.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Style for positive status glyphs (green).
    pub success: Style,
    /// Style for missing toolchains flagged as warnings (orange).
    pub warning: Style,
    /// Style for other missing toolchains and failed sub-checks (red).
    pub error: Style,
    /// Style for the detail view message (pink).
    pub keyword: Style,
    /// Style for footer hints (grey).
    pub subtle: Style,
    /// Style for the highlighted checkbox row (fuchsia).
    pub checkbox: Style,
    /// Style for the footer separator dot (dark grey).
    pub dot: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red(),
            keyword: Style::new().color256(211),
            subtle: Style::new().color256(241),
            checkbox: Style::new().color256(212),
            dot: Style::new().color256(236),
        }
    }

    /// Create a theme without colors (for non-TTY or `NO_COLOR`).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            keyword: Style::new(),
            subtle: Style::new(),
            checkbox: Style::new(),
            dot: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn from_settings(settings: &Settings) -> Self {
        if settings.colors {
            Self::new()
        } else {
            Self::plain()
        }
    }
}
