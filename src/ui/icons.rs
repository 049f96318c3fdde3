//! Status glyphs shown next to each toolchain.

use super::theme::Theme;

/// Canonical status kinds for detection results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusKind {
    /// Present or satisfied.
    Success,
    /// Missing and needed.
    Failed,
    /// Missing, but only worth a warning.
    Warning,
}

impl StatusKind {
    /// Status for a primary toolchain probe.
    pub fn for_tool(installed: bool, missing_is_warning: bool) -> Self {
        match (installed, missing_is_warning) {
            (true, _) => Self::Success,
            (false, true) => Self::Warning,
            (false, false) => Self::Failed,
        }
    }

    /// Status for a sub-check.
    pub fn for_check(passed: bool) -> Self {
        if passed {
            Self::Success
        } else {
            Self::Failed
        }
    }

    /// Unicode icon.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Failed | Self::Warning => "✗",
        }
    }

    /// Apply this status's color to arbitrary text.
    pub fn paint(self, theme: &Theme, text: &str) -> String {
        let style = match self {
            Self::Success => &theme.success,
            Self::Failed => &theme.error,
            Self::Warning => &theme.warning,
        };
        style.apply_to(text).to_string()
    }

    /// Styled icon string using the given theme.
    pub fn styled(self, theme: &Theme) -> String {
        self.paint(theme, self.icon())
    }
}
