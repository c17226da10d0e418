//! Frame module - the 16x16 pixel buffer handed to the display each tick
//!
//! Pixels are palette indices stored in a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..15 (left to right), y ranges 0..15 (top to bottom).
//! Writes outside the grid are dropped so drawing code can clip for free.

use crate::types::{Color, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Total number of pixels in the frame
const FRAME_SIZE: usize = (SCREEN_WIDTH * SCREEN_HEIGHT) as usize;

/// The display frame - 16 columns x 16 rows of palette colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    /// Flat array of pixels, row-major order (y * WIDTH + x)
    pixels: [Color; FRAME_SIZE],
}

impl FrameBuffer {
    /// Create a new frame filled with the background color
    pub fn new() -> Self {
        Self {
            pixels: [Color::Black; FRAME_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= SCREEN_WIDTH || y < 0 || y >= SCREEN_HEIGHT {
            return None;
        }
        Some((y as usize) * (SCREEN_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> i32 {
        SCREEN_WIDTH
    }

    pub fn height(&self) -> i32 {
        SCREEN_HEIGHT
    }

    /// Reset every pixel to the background color
    pub fn clear(&mut self) {
        self.pixels.fill(Color::Black);
    }

    /// Get the pixel at (x, y), or None when out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        Self::index(x, y).map(|idx| self.pixels[idx])
    }

    /// Set the pixel at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(idx) = Self::index(x, y) {
            self.pixels[idx] = color;
        }
    }

    /// Number of pixels that are not background
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&c| c != Color::Black).count()
    }

    /// Whether every pixel is background
    pub fn is_blank(&self) -> bool {
        self.lit_count() == 0
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
