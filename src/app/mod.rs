//! The interactive menu.
//!
//! [`App`] owns the detection results and the [`AppState`], turns events
//! into state changes and hands rendered frames to a [`Frontend`].
//!
//! # Modules
//!
//! - [`event`] - Event source and frontend traits
//! - [`keys`] - Key bindings per mode
//! - [`state`] - The selection state machine
//! - [`mock`] - Scripted events and a recording frontend for tests

pub mod event;
pub mod keys;
pub mod mock;
pub mod state;

pub use event::{Event, EventSource, Frontend};
pub use keys::{resolve, Action, Key};
pub use mock::{RecordingFrontend, ScriptedEvents};
pub use state::{AppState, Mode};

use crate::config::{catalog, Settings, TICK_RATE};
use crate::detection::{Detector, SystemRunner, ToolStatus};
use crate::error::Result;
use crate::ui::render::{detail_view, farewell_view, frame, listing_view};
use crate::ui::{ProgressSpinner, TerminalFrontend, Theme};

/// The menu: detection results plus selection state.
pub struct App {
    state: AppState,
    tools: Vec<ToolStatus>,
    theme: Theme,
}

impl App {
    /// Create the menu over already-detected toolchains.
    pub fn new(tools: Vec<ToolStatus>, theme: Theme) -> Self {
        Self {
            state: AppState::new(tools.len()),
            tools,
            theme,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn tools(&self) -> &[ToolStatus] {
        &self.tools
    }

    /// Render the current screen.
    pub fn view(&self) -> String {
        if self.state.is_quitting() {
            return farewell_view();
        }

        let body = match self.state.mode() {
            Mode::Listing => listing_view(&self.theme, &self.tools, self.state.cursor()),
            Mode::Detail => detail_view(&self.theme, self.tools.get(self.state.cursor())),
        };
        frame(&body)
    }

    /// Apply one event, returning whether the screen needs a redraw.
    pub fn update(&mut self, event: Event) -> bool {
        match event {
            Event::Tick => !self.state.is_quitting(),
            Event::Key(key) => resolve(self.state.mode(), key)
                .map(|action| self.state.apply(action))
                .unwrap_or(false),
        }
    }

    /// Run the menu until the user quits.
    ///
    /// The exit screen is drawn exactly once, as the last frame.
    pub fn run<E, F>(mut self, events: &mut E, frontend: &mut F) -> Result<()>
    where
        E: EventSource,
        F: Frontend,
    {
        frontend.draw(&self.view())?;

        while !self.state.is_quitting() {
            let tick = (self.state.mode() == Mode::Detail).then_some(TICK_RATE);
            let event = events.next_event(tick)?;
            if self.update(event) {
                frontend.draw(&self.view())?;
            }
        }

        Ok(())
    }
}

/// Probe every toolchain in the catalog, with a spinner on terminals.
pub fn detect_toolchains(settings: &Settings) -> Vec<ToolStatus> {
    let spinner = if settings.interactive {
        ProgressSpinner::new("Checking toolchains...")
    } else {
        ProgressSpinner::hidden()
    };

    let mut detector = Detector::new(SystemRunner::new());
    let tools = detector.detect_all_with(catalog(), |spec| {
        spinner.set_message(&format!("Checking {}...", spec.name));
    });

    spinner.finish();
    tools
}

/// Detect toolchains, then run the menu on the real terminal.
pub fn launch(settings: &Settings) -> Result<()> {
    let theme = Theme::from_settings(settings);
    let tools = detect_toolchains(settings);

    let (mut frontend, mut events) = TerminalFrontend::start()?;
    App::new(tools, theme).run(&mut events, &mut frontend)
}
