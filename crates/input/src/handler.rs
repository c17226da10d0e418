//! Button level tracking for terminal environments.
//!
//! Terminals with keyboard enhancement report key releases, so the button
//! simply follows press/release. Everywhere else each press (including
//! autorepeat) holds the button for a short release timeout, and the
//! long-press key holds it long enough to cross the long-press threshold.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::map::{is_button_key, is_long_press_key};
use crate::types::{LONG_PRESS_TICKS, TICK_MS};

// Longer than a typical autorepeat interval, so a held key stays down once
// repeats start, but short enough that a tap stays well under a long press.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 100;

/// Synthetic hold for the long-press key: the threshold plus a few ticks of slack.
pub const LONG_PRESS_HOLD_MS: u32 = (LONG_PRESS_TICKS + 5) * TICK_MS;

/// Tracks whether the arcade button is currently down.
#[derive(Debug, Clone)]
pub struct ButtonInput {
    /// Set from real press/release events.
    down: bool,
    /// Synthetic hold deadline.
    held_until: Option<Instant>,
    release_events: bool,
    key_release_timeout_ms: u32,
}

impl ButtonInput {
    pub fn new() -> Self {
        Self {
            down: false,
            held_until: None,
            release_events: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    /// Trust release events from the terminal instead of timing out holds.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Feed a key event. Returns true if the key belongs to the button.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        self.handle_key_event_at(key, Instant::now())
    }

    pub fn handle_key_event_at(&mut self, key: KeyEvent, now: Instant) -> bool {
        if is_long_press_key(key.code) {
            if key.kind != KeyEventKind::Release {
                self.hold_for(now, LONG_PRESS_HOLD_MS);
            }
            return true;
        }
        if !is_button_key(key.code) {
            return false;
        }

        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat if self.release_events => {
                self.down = true;
            }
            KeyEventKind::Press | KeyEventKind::Repeat => {
                self.hold_for(now, self.key_release_timeout_ms);
            }
            KeyEventKind::Release => {
                self.down = false;
                self.held_until = None;
            }
        }
        true
    }

    fn hold_for(&mut self, now: Instant, ms: u32) {
        let until = now + Duration::from_millis(ms as u64);
        self.held_until = Some(match self.held_until {
            Some(current) if current > until => current,
            _ => until,
        });
    }

    /// Button level right now.
    pub fn is_pressed(&mut self) -> bool {
        self.is_pressed_at(Instant::now())
    }

    pub fn is_pressed_at(&mut self, now: Instant) -> bool {
        if let Some(until) = self.held_until {
            if now >= until {
                self.held_until = None;
            }
        }
        self.down || self.held_until.is_some()
    }

    pub fn reset(&mut self) {
        self.down = false;
        self.held_until = None;
    }
}

impl Default for ButtonInput {
    fn default() -> Self {
        Self::new()
    }
}
