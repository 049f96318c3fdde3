//! The selection state machine.
//!
//! ```text
//!            Select             Quit
//!  Listing ─────────▶ Detail ─────────▶ quitting
//!     ▲ │◀───────────────┘
//!     │ │      Back
//!     └─┘ Up / Down
//!     │
//!     └──────────────────────────────▶ quitting
//!                  Quit
//! ```
//!
//! Once quitting, every further action is ignored.

use super::keys::Action;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// The checkbox list of toolchains.
    #[default]
    Listing,
    /// The confirmation line for the chosen toolchain.
    Detail,
}

/// Cursor, mode and quit flag for the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    cursor: usize,
    rows: usize,
    mode: Mode,
    quitting: bool,
}

impl AppState {
    /// Initial state for a menu with `rows` entries.
    pub fn new(rows: usize) -> Self {
        Self {
            cursor: 0,
            rows,
            mode: Mode::Listing,
            quitting: false,
        }
    }

    /// Index of the highlighted row, always in `[0, rows - 1]`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_quitting(&self) -> bool {
        self.quitting
    }

    fn last_index(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Apply `action`, returning whether the state changed.
    ///
    /// Actions that make no sense in the current mode are ignored.
    pub fn apply(&mut self, action: Action) -> bool {
        if self.quitting {
            return false;
        }

        let before = self.clone();
        match (self.mode, action) {
            (_, Action::Quit) => self.quitting = true,
            (Mode::Listing, Action::Down) => {
                self.cursor = (self.cursor + 1).min(self.last_index());
            }
            (Mode::Listing, Action::Up) => self.cursor = self.cursor.saturating_sub(1),
            (Mode::Listing, Action::Select) => self.mode = Mode::Detail,
            (Mode::Detail, Action::Back) => self.mode = Mode::Listing,
            _ => {}
        }

        let changed = *self != before;
        if changed {
            tracing::debug!(
                "{:?}: cursor={} mode={:?} quitting={}",
                action,
                self.cursor,
                self.mode,
                self.quitting
            );
        }
        changed
    }
}
