//! BitGrid module - one bit per cell playfield
//!
//! The Stacker field is 16x16 and each row packs into a single `u16`
//! (bit x = column x). Row 0 is the top of the screen.
//! Accessors take signed coordinates and treat anything off the grid as empty;
//! writes off the grid are ignored.

use crate::types::{SCREEN_HEIGHT, SCREEN_WIDTH};

const ROWS: usize = SCREEN_HEIGHT as usize;

/// All columns set
const FULL_ROW: u16 = u16::MAX;

/// Packed 16x16 occupancy grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitGrid {
    rows: [u16; ROWS],
}

impl BitGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self { rows: [0; ROWS] }
    }

    #[inline(always)]
    fn in_bounds(x: i32, y: i32) -> bool {
        (0..SCREEN_WIDTH).contains(&x) && (0..SCREEN_HEIGHT).contains(&y)
    }

    pub fn width(&self) -> i32 {
        SCREEN_WIDTH
    }

    pub fn height(&self) -> i32 {
        SCREEN_HEIGHT
    }

    /// Whether (x, y) is filled. Out of bounds reads as empty.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize] & (1 << x) != 0
    }

    /// Fill or empty (x, y). Returns false (and does nothing) when out of bounds.
    pub fn set(&mut self, x: i32, y: i32, filled: bool) -> bool {
        if !Self::in_bounds(x, y) {
            return false;
        }
        let bit = 1u16 << x;
        if filled {
            self.rows[y as usize] |= bit;
        } else {
            self.rows[y as usize] &= !bit;
        }
        true
    }

    /// Raw bits of a row (0 when out of bounds)
    pub fn row(&self, y: i32) -> u16 {
        if (0..SCREEN_HEIGHT).contains(&y) {
            self.rows[y as usize]
        } else {
            0
        }
    }

    pub fn set_row(&mut self, y: i32, bits: u16) {
        if (0..SCREEN_HEIGHT).contains(&y) {
            self.rows[y as usize] = bits;
        }
    }

    pub fn is_row_full(&self, y: i32) -> bool {
        (0..SCREEN_HEIGHT).contains(&y) && self.rows[y as usize] == FULL_ROW
    }

    pub fn is_row_empty(&self, y: i32) -> bool {
        self.row(y) == 0
    }

    /// Move every row down by one. The bottom row falls off and the top row is emptied.
    pub fn shift_down(&mut self) {
        self.rows.copy_within(0..ROWS - 1, 1);
        self.rows[0] = 0;
    }

    /// Set every bit of a row, then clear the listed columns.
    pub fn fill_row_with_gaps(&mut self, y: i32, gaps: &[u8]) {
        let mut bits = FULL_ROW;
        for &x in gaps {
            if (x as i32) < SCREEN_WIDTH {
                bits &= !(1 << x);
            }
        }
        self.set_row(y, bits);
    }

    /// Empty row `y` and every row below it.
    pub fn clear_from(&mut self, y: i32) {
        let start = y.clamp(0, SCREEN_HEIGHT) as usize;
        for row in &mut self.rows[start..] {
            *row = 0;
        }
    }

    /// Number of filled cells
    pub fn count(&self) -> u32 {
        self.rows.iter().map(|r| r.count_ones()).sum()
    }

    pub fn clear(&mut self) {
        self.rows = [0; ROWS];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let g = BitGrid::new();
        assert_eq!(g.count(), 0);
        for y in 0..16 {
            assert!(g.is_row_empty(y));
        }
    }

    #[test]
    fn set_get_each_corner() {
        let mut g = BitGrid::new();
        for (x, y) in [(0, 0), (15, 0), (0, 15), (15, 15)] {
            assert!(g.set(x, y, true));
            assert!(g.get(x, y));
        }
        assert_eq!(g.count(), 4);
        assert!(g.set(15, 15, false));
        assert!(!g.get(15, 15));
    }

    #[test]
    fn out_of_bounds_is_noop() {
        let mut g = BitGrid::new();
        assert!(!g.set(-1, 0, true));
        assert!(!g.set(16, 0, true));
        assert!(!g.set(0, -1, true));
        assert!(!g.set(0, 16, true));
        assert_eq!(g.count(), 0);
        assert!(!g.get(-1, -1));
        assert!(!g.get(16, 16));
        assert_eq!(g.row(-1), 0);
        assert!(!g.is_row_full(16));
    }

    #[test]
    fn shift_down_moves_rows_and_drops_bottom() {
        let mut g = BitGrid::new();
        g.set_row(0, 0b1010);
        g.set_row(15, 0xFFFF);
        g.shift_down();
        assert_eq!(g.row(0), 0);
        assert_eq!(g.row(1), 0b1010);
        assert!(g.is_row_empty(15));
    }

    #[test]
    fn fill_row_with_gaps_clears_listed_columns() {
        let mut g = BitGrid::new();
        g.fill_row_with_gaps(0, &[0, 7, 15]);
        assert_eq!(g.row(0).count_ones(), 13);
        assert!(!g.get(0, 0));
        assert!(!g.get(7, 0));
        assert!(!g.get(15, 0));
        assert!(g.get(1, 0));
        assert!(!g.is_row_full(0));
    }

    #[test]
    fn clear_from_only_touches_rows_at_and_below() {
        let mut g = BitGrid::new();
        for y in 0..16 {
            g.set_row(y, 0xFFFF);
        }
        g.clear_from(10);
        for y in 0..10 {
            assert!(g.is_row_full(y), "row {} should survive", y);
        }
        for y in 10..16 {
            assert!(g.is_row_empty(y), "row {} should be cleared", y);
        }
    }
}
