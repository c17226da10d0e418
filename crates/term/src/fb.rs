//! Cell buffer and style types for terminal rendering.

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `num / 255`.
    pub fn scaled(self, num: u8) -> Self {
        let s = |c: u8| ((c as u16 * num as u16) / 255) as u8;
        Self::new(s(self.r), s(self.g), s(self.b))
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn plain(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::plain(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

/// 2D buffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl CellBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the buffer.
    ///
    /// This preserves the underlying allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    /// Row `y`, or an empty slice when out of range.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |y| self.row(y))
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` left to right, clipped at the right edge. Returns the x after the last char.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put_char(cx, y, ch, style);
            cx += 1;
        }
        cx
    }

    /// Write a decimal number without allocating.
    pub fn put_u32(&mut self, x: u16, y: u16, value: u32, style: CellStyle) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = value;
        let mut len = 0;
        loop {
            digits[len] = b'0' + (n % 10) as u8;
            len += 1;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        let mut cx = x;
        for &d in digits[..len].iter().rev() {
            self.put_char(cx, y, d as char, style);
            cx = cx.saturating_add(1);
        }
        cx
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Row `y` as a string (for tests and debugging).
    pub fn row_string(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .map(|c| c.ch)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_u32_writes_digits() {
        let mut fb = CellBuffer::new(12, 1);
        let end = fb.put_u32(1, 0, 1204, CellStyle::default());
        assert_eq!(end, 5);
        assert_eq!(fb.row_string(0), " 1204       ");
        fb.put_u32(8, 0, 0, CellStyle::default());
        assert_eq!(fb.get(8, 0).map(|c| c.ch), Some('0'));
    }

    #[test]
    fn put_str_clips() {
        let mut fb = CellBuffer::new(3, 1);
        fb.put_str(1, 0, "abc", CellStyle::default());
        assert_eq!(fb.row_string(0), " ab");
    }

    #[test]
    fn rows_follow_resize() {
        let mut fb = CellBuffer::new(3, 2);
        fb.put_str(0, 1, "xyz", CellStyle::default());
        assert_eq!(fb.rows().count(), 2);
        assert_eq!(fb.row(1).iter().map(|c| c.ch).collect::<String>(), "xyz");
        assert!(fb.row(2).is_empty());

        fb.resize(4, 1);
        assert_eq!(fb.rows().map(<[Cell]>::len).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn scaled_rgb() {
        assert_eq!(Rgb::new(255, 128, 0).scaled(255), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::new(255, 128, 0).scaled(0), Rgb::new(0, 0, 0));
        assert_eq!(Rgb::new(255, 255, 255).scaled(128), Rgb::new(128, 128, 128));
    }
}
