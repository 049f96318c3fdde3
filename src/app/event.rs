//! Seams between the menu and the terminal.

use std::time::Duration;

use crate::error::Result;

use super::keys::Key;

/// Something the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A key press.
    Key(Key),
    /// The redraw timer fired.
    Tick,
}

/// Delivers events to the menu loop.
pub trait EventSource {
    /// Block until the next event.
    ///
    /// With `tick` set, return [`Event::Tick`] if no key arrives within that
    /// interval. Without it, wait for a key indefinitely.
    fn next_event(&mut self, tick: Option<Duration>) -> Result<Event>;
}

/// Draws frames produced by the renderers.
pub trait Frontend {
    /// Replace whatever was drawn last with `frame`.
    fn draw(&mut self, frame: &str) -> Result<()>;
}
