//! TerminalRenderer: flushes a cell buffer to a real terminal.
//!
//! Each frame is compared row by row against the one drawn before it and
//! only the differing spans are written. With nothing comparable on screen
//! (first frame, resize, [`TerminalRenderer::invalidate`]) the screen is
//! cleared and every cell counts as differing.

use std::io::{self, Write};
use std::ops::Range;

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellBuffer, CellStyle, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<CellBuffer>,
    buf: Vec<u8>,
    keyboard_enhanced: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
            keyboard_enhanced: false,
        }
    }

    /// Switch to raw mode and the alternate screen.
    ///
    /// Key release reporting is requested when the terminal supports it; check
    /// [`TerminalRenderer::keyboard_enhanced`] afterwards.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        if self.keyboard_enhanced {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()
    }

    /// Whether the terminal reports key releases.
    pub fn keyboard_enhanced(&self) -> bool {
        self.keyboard_enhanced
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.keyboard_enhanced {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen so the next draw repaints everything.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame's buffer.
    ///
    /// Callers keep one `CellBuffer` and pass it in every frame; it comes back
    /// holding stale contents that the next render overwrites.
    pub fn draw_swap(&mut self, fb: &mut CellBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame_into(self.last.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        let mut prev = self
            .last
            .take()
            .unwrap_or_else(|| CellBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode the commands that turn `prev` on screen into `next`.
///
/// `prev` is ignored when it is `None` or a different size; the screen is
/// cleared and all of `next` written instead. Nothing goes to stdout.
pub fn encode_frame_into(
    prev: Option<&CellBuffer>,
    next: &CellBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    for (y, row) in next.rows().enumerate() {
        let before = prev.map_or(&[][..], |p| p.row(y as u16));
        for span in DirtySpans::new(before, row) {
            out.queue(cursor::MoveTo(span.start as u16, y as u16))?;
            for cell in &row[span] {
                pen.apply(out, cell.style)?;
                out.queue(Print(cell.ch))?;
            }
        }
    }

    if pen.0.is_some() {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}

/// Style last sent to the terminal within one frame.
#[derive(Debug, Default)]
struct Pen(Option<CellStyle>);

impl Pen {
    /// Emit only the parts of `style` that differ from the current pen.
    fn apply(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        let mut current = self.0;
        let attrs = |s: CellStyle| (s.bold, s.dim);
        if current.map(attrs) != Some(attrs(style)) {
            // SGR reset also drops both colors.
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            current = None;
        }
        if current.map(|s| s.fg) != Some(style.fg) {
            out.queue(SetForegroundColor(truecolor(style.fg)))?;
        }
        if current.map(|s| s.bg) != Some(style.bg) {
            out.queue(SetBackgroundColor(truecolor(style.bg)))?;
        }
        self.0 = Some(style);
        Ok(())
    }
}

fn truecolor(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Maximal column ranges where `next` differs from `prev`.
///
/// Columns past the end of `prev` always differ.
struct DirtySpans<'a> {
    prev: &'a [Cell],
    next: &'a [Cell],
    x: usize,
}

impl<'a> DirtySpans<'a> {
    fn new(prev: &'a [Cell], next: &'a [Cell]) -> Self {
        Self { prev, next, x: 0 }
    }

    fn differs(&self, x: usize) -> bool {
        self.prev.get(x) != self.next.get(x)
    }
}

impl Iterator for DirtySpans<'_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Range<usize>> {
        let len = self.next.len();
        let start = (self.x..len).find(|&x| self.differs(x))?;
        let end = (start..len).find(|&x| !self.differs(x)).unwrap_or(len);
        self.x = end;
        Some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(prev: Option<&CellBuffer>, next: &CellBuffer) -> String {
        let mut out = Vec::new();
        encode_frame_into(prev, next, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn row(s: &str) -> Vec<Cell> {
        s.chars().map(|ch| CellStyle::default().into_cell(ch)).collect()
    }

    #[test]
    fn first_frame_clears_and_writes_every_row() {
        let mut fb = CellBuffer::new(2, 2);
        fb.put_str(0, 0, "AB", CellStyle::default());
        fb.put_str(0, 1, "CD", CellStyle::default());

        let text = encode(None, &fb);
        assert!(text.starts_with("\x1b[2J"));
        assert!(text.contains("AB"));
        assert!(text.contains("CD"));
    }

    #[test]
    fn unchanged_frame_encodes_nothing() {
        let mut a = CellBuffer::new(4, 2);
        a.put_str(0, 0, "wxyz", CellStyle::default());
        let b = a.clone();
        assert_eq!(encode(Some(&a), &b), "");
    }

    #[test]
    fn resized_frame_is_repainted_in_full() {
        let mut small = CellBuffer::new(3, 1);
        small.put_str(0, 0, "abc", CellStyle::default());
        let mut big = small.clone();
        big.resize(4, 1);
        big.put_str(0, 0, "abc", CellStyle::default());

        let text = encode(Some(&small), &big);
        assert!(text.starts_with("\x1b[2J"));
        assert!(text.contains("abc"));
    }

    #[test]
    fn diff_writes_only_changed_span() {
        let a = CellBuffer::new(6, 1);
        let mut b = a.clone();
        b.put_str(2, 0, "XY", CellStyle::default());

        let text = encode(Some(&a), &b);
        assert!(!text.contains("\x1b[2J"));
        // MoveTo is 1-based on the wire.
        assert!(text.contains("\x1b[1;3H"));
        assert!(text.contains("XY"));
    }

    #[test]
    fn spans_coalesce_adjacent_changes() {
        let spans: Vec<_> = DirtySpans::new(&row("abcde"), &row("aXXXe")).collect();
        assert_eq!(spans, vec![1..4]);

        let spans: Vec<_> = DirtySpans::new(&row("abcde"), &row("Xbcdf")).collect();
        assert_eq!(spans, vec![0..1, 4..5]);

        let spans: Vec<_> = DirtySpans::new(&[], &row("ab")).collect();
        assert_eq!(spans, vec![0..2]);
    }

    #[test]
    fn pen_skips_repeated_style() {
        let style = CellStyle::plain(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6));
        let mut pen = Pen::default();
        let mut out = Vec::new();
        pen.apply(&mut out, style).unwrap();
        assert!(!out.is_empty());

        out.clear();
        pen.apply(&mut out, style).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn pen_sends_only_the_changed_color() {
        let style = CellStyle::plain(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6));
        let mut pen = Pen::default();
        let mut out = Vec::new();
        pen.apply(&mut out, style).unwrap();

        out.clear();
        let recolored = CellStyle {
            fg: Rgb::new(9, 9, 9),
            ..style
        };
        pen.apply(&mut out, recolored).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "\x1b[38;2;9;9;9m");
    }

    #[test]
    fn pen_resends_colors_after_attribute_change() {
        let style = CellStyle::plain(Rgb::new(1, 2, 3), Rgb::new(4, 5, 6));
        let mut pen = Pen::default();
        let mut out = Vec::new();
        pen.apply(&mut out, style).unwrap();

        out.clear();
        pen.apply(&mut out, CellStyle { dim: true, ..style }).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("38;2;1;2;3"));
        assert!(text.contains("48;2;4;5;6"));
    }
}
