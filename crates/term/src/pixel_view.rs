//! PixelView: maps the arcade's 16x16 frame into a terminal cell buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Console, FrameBuffer, Screen};
use crate::fb::{CellBuffer, CellStyle, Rgb};
use crate::types::{Color, VariantKind, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// What the status line under the matrix shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusLine {
    pub variant: VariantKind,
    pub screen: Screen,
    pub score: u32,
    pub brightness: u8,
}

impl StatusLine {
    pub fn from_console(console: &Console) -> Self {
        Self {
            variant: console.selection(),
            screen: console.screen(),
            score: console.score(),
            brightness: console.brightness(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Lowest scale applied to lit pixels, so brightness 0 stays visible.
const BRIGHTNESS_FLOOR: u8 = 48;

const PANEL_BG: Rgb = Rgb::new(10, 10, 14);

/// Renders the pixel matrix inside a border with a status line underneath.
pub struct PixelView {
    /// Pixel width in terminal columns.
    cell_w: u16,
    /// Pixel height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for PixelView {
    fn default() -> Self {
        // 2x1 keeps pixels roughly square in most terminal fonts.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl PixelView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Border size in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            SCREEN_WIDTH as u16 * self.cell_w + 2,
            SCREEN_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render into an existing buffer.
    ///
    /// This is the allocation-free hot path: the buffer is only resized when
    /// the viewport changes.
    pub fn render_into(
        &self,
        frame: &FrameBuffer,
        status: &StatusLine,
        viewport: Viewport,
        fb: &mut CellBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        // Status line plus the title hint.
        let total_h = frame_h + 2;
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };

        let border = CellStyle::plain(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        let scale = brightness_scale(status.brightness);
        for y in 0..SCREEN_HEIGHT {
            for x in 0..SCREEN_WIDTH {
                let color = frame.get(x, y).unwrap_or_default();
                let (ch, style) = pixel_cell(color, scale);
                let px = start_x + 1 + x as u16 * self.cell_w;
                let py = start_y + 1 + y as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_status(fb, status, start_x, start_y + frame_h);
    }

    /// Convenience helper that allocates a new buffer.
    pub fn render(&self, frame: &FrameBuffer, status: &StatusLine, viewport: Viewport) -> CellBuffer {
        let mut fb = CellBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, status, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut CellBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_status(&self, fb: &mut CellBuffer, status: &StatusLine, x: u16, y: u16) {
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::default();

        let mut cx = x;
        for ch in status.variant.as_str().chars() {
            fb.put_char(cx, y, ch.to_ascii_uppercase(), label);
            cx = cx.saturating_add(1);
        }
        cx = fb.put_str(cx.saturating_add(2), y, "SCORE ", label);
        cx = fb.put_u32(cx, y, status.score, value);
        cx = fb.put_str(cx.saturating_add(2), y, "BRIGHT ", label);
        fb.put_u32(cx, y, status.brightness as u32, value);

        if status.screen == Screen::Title {
            let hint = CellStyle { dim: true, ..value };
            fb.put_str(x, y.saturating_add(1), "tap: play  hold: next", hint);
        }
    }
}

/// Scale factor (out of 255) applied to lit pixels at `brightness`.
pub fn brightness_scale(brightness: u8) -> u8 {
    let span = (u8::MAX - BRIGHTNESS_FLOOR) as u16;
    BRIGHTNESS_FLOOR + ((brightness as u16 * span) / 255) as u8
}

fn pixel_cell(color: Color, scale: u8) -> (char, CellStyle) {
    if color == Color::Black {
        let dot = CellStyle {
            fg: Rgb::new(50, 50, 60),
            bg: PANEL_BG,
            bold: false,
            dim: true,
        };
        return ('·', dot);
    }
    let (r, g, b) = color.rgb();
    let fg = Rgb::new(r, g, b).scaled(scale);
    ('█', CellStyle::plain(fg, PANEL_BG))
}
