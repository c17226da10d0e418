//! Per-console state shared with whichever game is active.

use crate::frame::FrameBuffer;
use crate::input::{ButtonState, PressTracker};
use crate::rng::SimpleRng;
use crate::score::Scoreboard;
use crate::types::DEFAULT_BRIGHTNESS;

/// Everything a game may read or write during one tick.
///
/// Owned by the [`Console`](crate::console::Console) and lent to the active
/// game for the duration of a tick; games keep no references to it.
#[derive(Debug)]
pub struct TickContext {
    pub frame: FrameBuffer,
    pub score: Scoreboard,
    pub button: ButtonState,
    pub press: PressTracker,
    /// Output brightness for the host to apply to the display.
    pub brightness: u8,
    pub rng: SimpleRng,
}

impl TickContext {
    pub fn new(seed: u32) -> Self {
        Self {
            frame: FrameBuffer::new(),
            score: Scoreboard::default(),
            button: ButtonState::new(),
            press: PressTracker::new(),
            brightness: DEFAULT_BRIGHTNESS,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn pressed(&self) -> bool {
        self.button.is_pressed()
    }

    pub fn rising_edge(&self) -> bool {
        self.button.rising_edge()
    }
}
