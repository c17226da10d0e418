//! Text rendering on the pixel frame.
//!
//! Glyphs are 5x5 and advance 6 pixels. Characters without a glyph still
//! advance, so "GAME OVER" keeps its word gap.

use arrayvec::ArrayVec;

use crate::font::glyph;
use crate::frame::FrameBuffer;
use crate::types::{Color, GLYPH_ADVANCE, GLYPH_SIZE, SCREEN_WIDTH, TITLE_SCROLL_STEP};

/// Draw a single glyph with its top-left corner at (x, y).
///
/// Unknown characters draw nothing. Pixels off the frame are clipped.
pub fn draw_glyph(frame: &mut FrameBuffer, ch: char, x: i32, y: i32, color: Color) {
    let Some(rows) = glyph(ch) else {
        return;
    };
    for (r, bits) in rows.iter().enumerate() {
        for col in 0..GLYPH_SIZE {
            if (bits >> (GLYPH_SIZE - 1 - col)) & 1 == 1 {
                frame.set(x + col, y + r as i32, color);
            }
        }
    }
}

/// Draw text left to right starting at (x, y).
pub fn draw_text(frame: &mut FrameBuffer, text: &str, x: i32, y: i32, color: Color) {
    let mut cx = x;
    for ch in text.chars() {
        draw_glyph(frame, ch, cx, y, color);
        cx += GLYPH_ADVANCE;
    }
}

/// Advance width of `text` (6 px per character, trailing gap included).
pub fn text_width(text: &str) -> i32 {
    text.chars().count() as i32 * GLYPH_ADVANCE
}

/// Decimal digits of `value`, most significant first, without leading zeros.
pub fn score_digits(value: u32) -> ArrayVec<u8, 10> {
    let mut digits = ArrayVec::<u8, 10>::new();
    let mut v = value;
    loop {
        digits.push(b'0' + (v % 10) as u8);
        v /= 10;
        if v == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Draw `score` horizontally centered on `x`.
pub fn draw_score(frame: &mut FrameBuffer, score: u32, x: i32, y: i32, color: Color) {
    let digits = score_digits(score);
    let width = digits.len() as i32 * GLYPH_ADVANCE - 1;
    let mut cx = x - width / 2;
    for &d in digits.iter() {
        draw_glyph(frame, d as char, cx, y, color);
        cx += GLYPH_ADVANCE;
    }
}

/// Horizontal marquee state for title cards.
///
/// Each call to [`TitleScroller::advance`] moves the text half a pixel left;
/// once the text is fully off the left edge it re-enters from the right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleScroller {
    offset: f32,
}

impl TitleScroller {
    pub fn new() -> Self {
        Self {
            offset: SCREEN_WIDTH as f32,
        }
    }

    pub fn reset(&mut self) {
        self.offset = SCREEN_WIDTH as f32;
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Step the marquee and return the x to draw at.
    ///
    /// `wrap_width` is the advance width of the widest line being scrolled.
    pub fn advance(&mut self, wrap_width: i32) -> i32 {
        self.offset -= TITLE_SCROLL_STEP;
        if self.offset < -(wrap_width as f32) {
            self.offset = SCREEN_WIDTH as f32;
        }
        self.offset as i32
    }

    /// Step the marquee and draw a single line of text.
    pub fn draw(&mut self, frame: &mut FrameBuffer, text: &str, y: i32, color: Color) {
        let x = self.advance(text_width(text));
        draw_text(frame, text, x, y, color);
    }
}

impl Default for TitleScroller {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyph_one_draws_expected_pixels() {
        let mut fb = FrameBuffer::new();
        draw_glyph(&mut fb, '1', 0, 0, Color::White);
        // Row 0 of '1' is 00100.
        assert_eq!(fb.get(2, 0), Some(Color::White));
        assert_eq!(fb.get(0, 0), Some(Color::Black));
        // Row 4 is 01110.
        assert_eq!(fb.get(1, 4), Some(Color::White));
        assert_eq!(fb.get(3, 4), Some(Color::White));
        assert_eq!(fb.get(4, 4), Some(Color::Black));
    }

    #[test]
    fn unknown_glyph_is_ignored() {
        let mut fb = FrameBuffer::new();
        draw_glyph(&mut fb, '#', 3, 3, Color::White);
        assert!(fb.is_blank());
    }

    #[test]
    fn glyph_partly_off_screen_is_clipped() {
        let mut fb = FrameBuffer::new();
        draw_glyph(&mut fb, 'H', 14, 14, Color::Red);
        // 'H' rows 0/1 have the left column set: (14,14) and (14,15).
        assert_eq!(fb.get(14, 14), Some(Color::Red));
        assert_eq!(fb.get(14, 15), Some(Color::Red));
        assert_eq!(fb.lit_count(), 2);
    }

    #[test]
    fn text_advances_six_pixels() {
        let mut a = FrameBuffer::new();
        draw_text(&mut a, "LL", 0, 0, Color::White);
        let mut b = FrameBuffer::new();
        draw_glyph(&mut b, 'L', 0, 0, Color::White);
        draw_glyph(&mut b, 'L', 6, 0, Color::White);
        assert_eq!(a, b);
    }

    #[test]
    fn empty_text_is_noop() {
        let mut fb = FrameBuffer::new();
        draw_text(&mut fb, "", 0, 0, Color::White);
        assert!(fb.is_blank());
        assert_eq!(text_width(""), 0);
    }

    #[test]
    fn score_digits_have_no_leading_zeros() {
        assert_eq!(score_digits(0).as_slice(), b"0");
        assert_eq!(score_digits(7).as_slice(), b"7");
        assert_eq!(score_digits(120).as_slice(), b"120");
        assert_eq!(score_digits(u32::MAX).as_slice(), b"4294967295");
    }

    #[test]
    fn single_digit_score_is_centered() {
        let mut a = FrameBuffer::new();
        draw_score(&mut a, 5, 8, 10, Color::White);
        let mut b = FrameBuffer::new();
        // width 5 -> start at 8 - 2 = 6
        draw_glyph(&mut b, '5', 6, 10, Color::White);
        assert_eq!(a, b);
    }

    #[test]
    fn two_digit_score_is_centered() {
        let mut a = FrameBuffer::new();
        draw_score(&mut a, 42, 8, 0, Color::White);
        let mut b = FrameBuffer::new();
        // width 11 -> start at 8 - 5 = 3
        draw_text(&mut b, "42", 3, 0, Color::White);
        assert_eq!(a, b);
    }

    #[test]
    fn scroller_moves_half_pixel_per_call() {
        let mut s = TitleScroller::new();
        assert_eq!(s.advance(24), 15);
        assert_eq!(s.offset(), 15.5);
        assert_eq!(s.advance(24), 15);
        assert_eq!(s.advance(24), 14);
    }

    #[test]
    fn scroller_wraps_after_leaving_left_edge() {
        let mut s = TitleScroller::new();
        // From 16.0 down to -24.0 is 80 calls; the 81st drops below -24 and wraps.
        for _ in 0..80 {
            s.advance(24);
        }
        assert_eq!(s.offset(), -24.0);
        s.advance(24);
        assert_eq!(s.offset(), 16.0);
    }
}
