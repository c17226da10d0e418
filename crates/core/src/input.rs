//! Single-button input tracking.
//!
//! The host samples one boolean per tick. [`ButtonState`] turns consecutive
//! samples into edges; [`PressTracker`] classifies holds into short and long
//! presses so that one hold can trigger at most one action.

use crate::types::LONG_PRESS_TICKS;

/// Current and previous button level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pressed: bool,
    was_pressed: bool,
}

impl ButtonState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record this tick's raw level. Call exactly once per tick.
    pub fn sample(&mut self, pressed: bool) {
        self.was_pressed = self.pressed;
        self.pressed = pressed;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn was_pressed(&self) -> bool {
        self.was_pressed
    }

    /// Level changed since the previous tick.
    pub fn edge(&self) -> bool {
        self.pressed ^ self.was_pressed
    }

    /// Pressed now, not pressed on the previous tick.
    pub fn rising_edge(&self) -> bool {
        self.pressed && !self.was_pressed
    }

    /// Released this tick.
    pub fn falling_edge(&self) -> bool {
        !self.pressed && self.was_pressed
    }
}

/// Outcome of feeding one tick into a [`PressTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressEvent {
    None,
    /// The hold just reached the long-press threshold. Fires once per hold.
    LongPress,
    /// The button was released before any long press fired.
    ShortPress,
}

/// Hold counter with a one-shot action flag and a release latch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PressTracker {
    hold_ticks: u32,
    action_taken: bool,
    ignore_until_release: bool,
}

impl PressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hold_ticks(&self) -> u32 {
        self.hold_ticks
    }

    pub fn action_taken(&self) -> bool {
        self.action_taken
    }

    pub fn ignoring(&self) -> bool {
        self.ignore_until_release
    }

    /// Clear the hold counter and the one-shot flag.
    pub fn reset(&mut self) {
        self.hold_ticks = 0;
        self.action_taken = false;
    }

    /// Swallow input until the button has been seen released.
    pub fn ignore_until_release(&mut self) {
        self.ignore_until_release = true;
    }

    /// Feed one tick of button level.
    pub fn update(&mut self, pressed: bool) -> PressEvent {
        if self.ignore_until_release {
            if !pressed {
                self.ignore_until_release = false;
            }
            return PressEvent::None;
        }

        if pressed {
            self.hold_ticks = self.hold_ticks.saturating_add(1);
            if self.hold_ticks >= LONG_PRESS_TICKS && !self.action_taken {
                self.action_taken = true;
                return PressEvent::LongPress;
            }
            return PressEvent::None;
        }

        let short = self.hold_ticks > 0 && !self.action_taken;
        self.reset();
        if short {
            PressEvent::ShortPress
        } else {
            PressEvent::None
        }
    }
}
