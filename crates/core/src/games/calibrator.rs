//! Calibrator: steps the display brightness through a fixed ladder.
//!
//! Each press moves to the next level and writes it to the shared context for
//! the host to apply. A long press leaves, using the same hold tracking as the
//! title screen.

use std::fmt::Write as _;

use arrayvec::ArrayString;
use tracing::debug;

use super::Game;
use crate::config::CalibratorTuning;
use crate::context::TickContext;
use crate::frame::FrameBuffer;
use crate::input::PressEvent;
use crate::text::{draw_text, text_width, TitleScroller};
use crate::types::{Color, BRIGHTNESS_HOLD_TICKS, SCREEN_WIDTH};

pub const TITLE: &str = "BRIGHT";
const TITLE_SECOND_LINE: &str = "NESS";

#[derive(Debug, Clone)]
pub struct Calibrator {
    levels: [u8; 8],
    index: usize,
    hold_ticks: u32,
    title: TitleScroller,
}

impl Calibrator {
    /// Start at the ladder position of `current` (the bottom if it is not on the ladder).
    pub fn new(tuning: CalibratorTuning, current: u8) -> Self {
        let index = tuning
            .levels
            .iter()
            .position(|&level| level == current)
            .unwrap_or(0);
        Self {
            levels: tuning.levels,
            index,
            hold_ticks: BRIGHTNESS_HOLD_TICKS,
            title: TitleScroller::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn level(&self) -> u8 {
        self.levels[self.index]
    }

    /// Ticks left showing the level readout
    pub fn hold_ticks(&self) -> u32 {
        self.hold_ticks
    }

    fn draw_title(&mut self, frame: &mut FrameBuffer) {
        let x = self.title.advance(text_width(TITLE));
        draw_text(frame, TITLE, x, 2, Color::White);
        draw_text(frame, TITLE_SECOND_LINE, x, 8, Color::White);
    }

    fn draw_level(&self, frame: &mut FrameBuffer) {
        let mut label = ArrayString::<8>::new();
        // Cannot overflow: at most "L" plus one digit.
        let _ = write!(label, "L{}", self.index);
        let x = (SCREEN_WIDTH - text_width(&label)) / 2;
        draw_text(frame, &label, x, 5, Color::White);
    }
}

impl Game for Calibrator {
    fn advance(&mut self, ctx: &mut TickContext) -> bool {
        if self.hold_ticks > 0 {
            self.hold_ticks -= 1;
            self.draw_level(&mut ctx.frame);
        } else {
            self.draw_title(&mut ctx.frame);
        }

        if ctx.rising_edge() {
            self.index = (self.index + 1) % self.levels.len();
            self.hold_ticks = BRIGHTNESS_HOLD_TICKS;
            ctx.brightness = self.level();
            debug!(index = self.index, brightness = ctx.brightness, "brightness changed");
        }

        ctx.press.update(ctx.pressed()) == PressEvent::LongPress
    }

    fn render_title(&mut self, frame: &mut FrameBuffer) {
        self.draw_title(frame);
    }
}
