//! Interactive terminal frontend.
//!
//! The terminal is put in raw mode for the lifetime of the frontend, so
//! ^C reaches the menu as a key instead of a signal. Keys are polled on
//! the menu loop's own thread; nothing is left reading stdin once the
//! loop returns. Frames are drawn in place by clearing the lines of the
//! previous frame.

use std::io::{self, Write};
use std::time::Duration;

use console::Term;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::app::{Event, EventSource, Frontend, Key};
use crate::error::{BootstrapError, Result};

/// Map a crossterm key press to a menu key.
///
/// Releases and repeats are dropped.
pub fn key_from_event(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let mapped = match key.code {
        KeyCode::Char(c)
            if key.modifiers.contains(KeyModifiers::CONTROL) && c.eq_ignore_ascii_case(&'c') =>
        {
            Key::CtrlC
        }
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    };
    Some(mapped)
}

/// Raw mode turns off output post-processing, so a bare `\n` moves down
/// without returning the carriage.
fn raw_lines(frame: &str) -> String {
    frame.replace('\n', "\r\n")
}

/// Raw mode and a hidden cursor, restored on drop.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()
            .map_err(|e| BootstrapError::render_engine(format!("could not enable raw mode: {}", e)))?;
        let mut guard = Self { active: true };
        if let Err(e) = execute!(io::stdout(), Hide) {
            guard.restore();
            return Err(BootstrapError::render_engine(format!(
                "could not hide cursor: {}",
                e
            )));
        }
        Ok(guard)
    }

    fn restore(&mut self) {
        if self.active {
            if let Err(e) = disable_raw_mode() {
                tracing::warn!("could not leave raw mode: {}", e);
            }
            execute!(io::stdout(), Show).ok();
            self.active = false;
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Draws frames on stdout.
pub struct TerminalFrontend {
    term: Term,
    drawn_lines: usize,
    _guard: TerminalGuard,
}

impl TerminalFrontend {
    /// Take over the terminal: enter raw mode and hide the cursor.
    ///
    /// Fails when stdout is not an interactive terminal. The terminal is
    /// handed back when the frontend is dropped.
    pub fn start() -> Result<(Self, KeyEvents)> {
        let term = Term::stdout();
        if !term.is_term() {
            return Err(BootstrapError::render_engine(
                "stdout is not an interactive terminal",
            ));
        }

        let guard = TerminalGuard::enter()?;
        Ok((
            Self {
                term,
                drawn_lines: 0,
                _guard: guard,
            },
            KeyEvents,
        ))
    }
}

impl Frontend for TerminalFrontend {
    fn draw(&mut self, frame: &str) -> Result<()> {
        if self.drawn_lines > 0 {
            self.term.clear_last_lines(self.drawn_lines)?;
        }
        self.term.write_all(raw_lines(frame).as_bytes())?;
        self.term.flush()?;
        self.drawn_lines = frame.matches('\n').count();
        Ok(())
    }
}

/// Key presses polled from the terminal.
#[derive(Debug, Default)]
pub struct KeyEvents;

impl EventSource for KeyEvents {
    fn next_event(&mut self, tick: Option<Duration>) -> Result<Event> {
        loop {
            if let Some(interval) = tick {
                if !event::poll(interval)? {
                    return Ok(Event::Tick);
                }
            }
            if let event::Event::Key(key) = event::read()? {
                if let Some(key) = key_from_event(key) {
                    return Ok(Event::Key(key));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keys::{resolve, Action};
    use crate::app::Mode;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn crossterm_keys_map_to_menu_keys() {
        assert_eq!(key_from_event(press(KeyCode::Up)), Some(Key::Up));
        assert_eq!(key_from_event(press(KeyCode::Down)), Some(Key::Down));
        assert_eq!(key_from_event(press(KeyCode::Enter)), Some(Key::Enter));
        assert_eq!(key_from_event(press(KeyCode::Esc)), Some(Key::Escape));
        assert_eq!(key_from_event(press(KeyCode::Char('j'))), Some(Key::Char('j')));
        assert_eq!(key_from_event(press(KeyCode::Tab)), Some(Key::Other));
    }

    #[test]
    fn ctrl_c_is_a_key_not_a_signal() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_from_event(ctrl_c), Some(Key::CtrlC));

        let shifted = KeyEvent::new(
            KeyCode::Char('C'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert_eq!(key_from_event(shifted), Some(Key::CtrlC));

        assert_eq!(key_from_event(press(KeyCode::Char('c'))), Some(Key::Char('c')));
    }

    #[test]
    fn ctrl_c_quits_from_every_mode() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let key = key_from_event(ctrl_c).unwrap();
        assert_eq!(resolve(Mode::Listing, key), Some(Action::Quit));
        assert_eq!(resolve(Mode::Detail, key), Some(Action::Quit));
    }

    #[test]
    fn releases_are_ignored() {
        let release =
            KeyEvent::new_with_kind(KeyCode::Char('j'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(key_from_event(release), None);
    }

    #[test]
    fn raw_frames_return_the_carriage() {
        assert_eq!(raw_lines("\n  a\n\n  b\n"), "\r\n  a\r\n\r\n  b\r\n");
        assert_eq!(raw_lines("no newline"), "no newline");
    }

    #[test]
    fn inactive_guard_restores_nothing() {
        let mut guard = TerminalGuard { active: false };
        guard.restore();
        assert!(!guard.active);
    }
}
