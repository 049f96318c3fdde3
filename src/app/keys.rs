//! Key bindings.
//!
//! Raw keys are resolved into semantic [`Action`]s per [`Mode`]; the state
//! machine only ever sees actions. The footer hints are derived from the
//! same table so they cannot drift from the bindings.

use super::state::Mode;

/// A key press, independent of the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Enter,
    Escape,
    CtrlC,
    Char(char),
    /// Anything the menu has no binding for.
    Other,
}

/// What a key press means in the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor one row down.
    Down,
    /// Move the cursor one row up.
    Up,
    /// Open the detail view for the row under the cursor.
    Select,
    /// Return from the detail view to the listing.
    Back,
    /// Leave the program.
    Quit,
}

/// Resolve `key` into an action for `mode`, if it is bound.
pub fn resolve(mode: Mode, key: Key) -> Option<Action> {
    match mode {
        Mode::Listing => match key {
            Key::Char('j') | Key::Down => Some(Action::Down),
            Key::Char('k') | Key::Up => Some(Action::Up),
            Key::Enter => Some(Action::Select),
            Key::Char('q') | Key::Escape | Key::CtrlC => Some(Action::Quit),
            _ => None,
        },
        Mode::Detail => match key {
            Key::Char('q') | Key::Escape => Some(Action::Back),
            Key::CtrlC => Some(Action::Quit),
            _ => None,
        },
    }
}

/// Footer hints for the listing, as (keys, description) pairs.
pub const LISTING_HINTS: &[(&str, &str)] = &[
    ("j/k, up/down", "select"),
    ("enter", "choose"),
    ("q, esc", "quit"),
];
