//! Scripted event source and recording frontend for testing.
//!
//! # Example
//!
//! ```
//! use reia_bootstrap::app::{App, Key, RecordingFrontend, ScriptedEvents};
//! use reia_bootstrap::ui::Theme;
//!
//! let mut events = ScriptedEvents::keys([Key::Char('j'), Key::Char('q')]);
//! let mut frontend = RecordingFrontend::new();
//!
//! App::new(Vec::new(), Theme::plain())
//!     .run(&mut events, &mut frontend)
//!     .unwrap();
//!
//! assert_eq!(frontend.last_frame(), Some("\n  See you later!\n\n"));
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use crate::error::{BootstrapError, Result};

use super::event::{Event, EventSource, Frontend};
use super::keys::Key;

/// Replays a fixed list of events, then reports the input as closed.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<Event>,
    waits: Vec<Option<Duration>>,
}

impl ScriptedEvents {
    /// Replay `events` in order.
    pub fn new(events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            waits: Vec::new(),
        }
    }

    /// Replay key presses in order.
    pub fn keys(keys: impl IntoIterator<Item = Key>) -> Self {
        Self::new(keys.into_iter().map(Event::Key))
    }

    /// The tick interval requested on each call, in order.
    pub fn waits(&self) -> &[Option<Duration>] {
        &self.waits
    }

    /// Events not yet delivered.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self, tick: Option<Duration>) -> Result<Event> {
        self.waits.push(tick);
        self.events.pop_front().ok_or(BootstrapError::InputClosed)
    }
}

/// Keeps every frame it is asked to draw.
#[derive(Debug, Default)]
pub struct RecordingFrontend {
    frames: Vec<String>,
}

impl RecordingFrontend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame drawn so far.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// The most recent frame.
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl Frontend for RecordingFrontend {
    fn draw(&mut self, frame: &str) -> Result<()> {
        self.frames.push(frame.to_string());
        Ok(())
    }
}
