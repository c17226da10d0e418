//! Countdown and game-over screens shared by the arcade games.

use crate::context::TickContext;
use crate::frame::FrameBuffer;
use crate::text::{draw_glyph, draw_score, draw_text, text_width, TitleScroller};
use crate::types::{
    Color, COUNTDOWN_TICKS, COUNTDOWN_TICKS_PER_DIGIT, GAME_OVER_INPUT_DELAY_TICKS, SCREEN_WIDTH,
};

/// 3-2-1 countdown shown before play starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    ticks: u32,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Digit currently displayed, if any
    pub fn digit(&self) -> Option<u32> {
        let shown = 3u32.checked_sub(self.ticks / COUNTDOWN_TICKS_PER_DIGIT)?;
        (shown > 0).then_some(shown)
    }

    /// Advance one tick and draw the digit. Returns true when the countdown is over.
    pub fn tick(&mut self, frame: &mut FrameBuffer) -> bool {
        self.ticks += 1;
        if let Some(d) = self.digit() {
            let ch = char::from_digit(d, 10).unwrap_or('0');
            draw_glyph(frame, ch, 6, 5, Color::White);
        }
        self.ticks >= COUNTDOWN_TICKS
    }
}

/// Scrolling "GAME OVER" with the final score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameOverScreen {
    ticks: u32,
    scroller: TitleScroller,
}

impl GameOverScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restart the input delay and the scroll.
    pub fn enter(&mut self) {
        self.ticks = 0;
        self.scroller.reset();
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Draw one frame. Returns true once a fresh press arrives after the input delay.
    pub fn tick(&mut self, ctx: &mut TickContext) -> bool {
        self.ticks += 1;

        let x = self.scroller.advance(text_width("GAME"));
        draw_text(&mut ctx.frame, "GAME", x, 0, Color::Red);
        draw_text(&mut ctx.frame, "OVER", x, 5, Color::Red);
        draw_score(
            &mut ctx.frame,
            ctx.score.value(),
            SCREEN_WIDTH / 2,
            11,
            Color::White,
        );

        ctx.rising_edge() && self.ticks > GAME_OVER_INPUT_DELAY_TICKS
    }
}
