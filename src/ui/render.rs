//! Pure renderers for the menu screens.
//!
//! Every function here maps data and a [`Theme`] to a string. Nothing
//! touches the terminal; [`super::terminal`] decides where frames go.

use crate::app::keys::LISTING_HINTS;
use crate::detection::ToolStatus;

use super::icons::StatusKind;
use super::theme::Theme;

/// Heading above the toolchain list.
pub const HEADING: &str = "Where would you like to begin?";

/// Message shown once when the program exits.
pub const FAREWELL: &str = "See you later!";

const MARGIN: &str = "  ";
const INDENT: &str = "    ";
const DOT: &str = " • ";

/// A checkbox row: `[x] label` when checked, `[ ] label` otherwise.
pub fn checkbox(theme: &Theme, label: &str, checked: bool) -> String {
    if checked {
        theme.checkbox.apply_to(format!("[x] {}", label)).to_string()
    } else {
        format!("[ ] {}", label)
    }
}

/// Glyphs for a toolchain and its sub-checks, e.g. `✓ (Cargo: ✓) (Rustup: ✗)`.
pub fn status_text(theme: &Theme, tool: &ToolStatus) -> String {
    let mut text = StatusKind::for_tool(tool.installed(), tool.missing_is_warning()).styled(theme);

    for check in tool.sub_checks() {
        let kind = StatusKind::for_check(check.passed);
        let detail = match (&check.minimum, check.passed) {
            (Some(minimum), false) => format!(" ({}: {} < {})", check.label, kind.icon(), minimum),
            _ => format!(" ({}: {})", check.label, kind.icon()),
        };
        text.push_str(&kind.paint(theme, &detail));
    }

    text
}

/// `<tier> | <glyphs>`.
pub fn status_line(theme: &Theme, tool: &ToolStatus) -> String {
    format!("{} | {}", tool.tier().label(), status_text(theme, tool))
}

/// Key binding hints joined by dots.
pub fn footer(theme: &Theme) -> String {
    let dot = theme.dot.apply_to(DOT).to_string();
    LISTING_HINTS
        .iter()
        .map(|(keys, what)| theme.subtle.apply_to(format!("{}: {}", keys, what)).to_string())
        .collect::<Vec<_>>()
        .join(&dot)
}

/// The toolchain list with the row at `cursor` checked.
pub fn listing_view(theme: &Theme, tools: &[ToolStatus], cursor: usize) -> String {
    let mut out = format!("{}\n\n", HEADING);

    for (index, tool) in tools.iter().enumerate() {
        out.push_str(&checkbox(theme, tool.label(), index == cursor));
        out.push('\n');
        out.push_str(&format!("{}{}\n", INDENT, status_line(theme, tool)));
        out.push_str(&format!("{}{}\n\n", INDENT, tool.description()));
    }

    out.push_str(&footer(theme));
    out
}

/// The single confirmation line for the chosen toolchain.
pub fn detail_view(theme: &Theme, tool: Option<&ToolStatus>) -> String {
    let message = match tool {
        Some(tool) => format!("You chose {}!", tool.name()),
        None => "Unknown choice".to_string(),
    };
    theme.keyword.apply_to(message).to_string()
}

/// Surround a screen body with a blank line above, two below, and a left margin.
pub fn frame(body: &str) -> String {
    let mut out = String::from("\n");
    for line in body.lines() {
        if !line.is_empty() {
            out.push_str(MARGIN);
        }
        out.push_str(line);
        out.push('\n');
    }
    out.push('\n');
    out
}

/// The exit screen.
pub fn farewell_view() -> String {
    frame(FAREWELL)
}
