//! 5x5 bitmap font for digits and letters.
//!
//! Each glyph is five rows; bit 4 of a row is the leftmost column.

/// Glyph bitmaps: indices 0-9 are digits, 10-35 are A-Z.
pub const FONT_5X5: [[u8; 5]; 36] = [
    [0x0E, 0x13, 0x15, 0x19, 0x0E], // 0
    [0x04, 0x0C, 0x04, 0x04, 0x0E], // 1
    [0x1E, 0x01, 0x0E, 0x10, 0x1F], // 2
    [0x1E, 0x01, 0x06, 0x01, 0x1E], // 3
    [0x12, 0x12, 0x1F, 0x02, 0x02], // 4
    [0x1F, 0x10, 0x1E, 0x01, 0x1E], // 5
    [0x0E, 0x10, 0x1E, 0x11, 0x0E], // 6
    [0x1F, 0x01, 0x02, 0x04, 0x04], // 7
    [0x0E, 0x11, 0x0E, 0x11, 0x0E], // 8
    [0x0E, 0x11, 0x0F, 0x01, 0x0E], // 9
    [0x0E, 0x11, 0x1F, 0x11, 0x11], // A
    [0x1E, 0x11, 0x1E, 0x11, 0x1E], // B
    [0x0F, 0x10, 0x10, 0x10, 0x0F], // C
    [0x1E, 0x11, 0x11, 0x11, 0x1E], // D
    [0x1F, 0x10, 0x1E, 0x10, 0x1F], // E
    [0x1F, 0x10, 0x1E, 0x10, 0x10], // F
    [0x0F, 0x10, 0x13, 0x11, 0x0F], // G
    [0x11, 0x11, 0x1F, 0x11, 0x11], // H
    [0x0E, 0x04, 0x04, 0x04, 0x0E], // I
    [0x07, 0x02, 0x02, 0x12, 0x0C], // J
    [0x12, 0x14, 0x18, 0x14, 0x12], // K
    [0x10, 0x10, 0x10, 0x10, 0x1F], // L
    [0x11, 0x1B, 0x15, 0x11, 0x11], // M
    [0x11, 0x19, 0x15, 0x13, 0x11], // N
    [0x0E, 0x11, 0x11, 0x11, 0x0E], // O
    [0x1E, 0x11, 0x1E, 0x10, 0x10], // P
    [0x0E, 0x11, 0x15, 0x12, 0x0D], // Q
    [0x1E, 0x11, 0x1E, 0x14, 0x12], // R
    [0x0F, 0x10, 0x0E, 0x01, 0x1E], // S
    [0x1F, 0x04, 0x04, 0x04, 0x04], // T
    [0x11, 0x11, 0x11, 0x11, 0x0E], // U
    [0x11, 0x11, 0x11, 0x0A, 0x04], // V
    [0x11, 0x11, 0x15, 0x1B, 0x11], // W
    [0x11, 0x0A, 0x04, 0x0A, 0x11], // X
    [0x11, 0x0A, 0x04, 0x04, 0x04], // Y
    [0x1F, 0x02, 0x04, 0x08, 0x1F], // Z
];

/// Map a character to its glyph index (letters are case-insensitive).
///
/// Returns None for anything without a glyph, including space.
pub fn glyph_index(ch: char) -> Option<usize> {
    match ch {
        '0'..='9' => Some(ch as usize - '0' as usize),
        'A'..='Z' => Some(ch as usize - 'A' as usize + 10),
        'a'..='z' => Some(ch as usize - 'a' as usize + 10),
        _ => None,
    }
}

/// Bitmap for a character, if it has one
pub fn glyph(ch: char) -> Option<&'static [u8; 5]> {
    glyph_index(ch).map(|i| &FONT_5X5[i])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_and_letters_map_in_order() {
        assert_eq!(glyph_index('0'), Some(0));
        assert_eq!(glyph_index('9'), Some(9));
        assert_eq!(glyph_index('A'), Some(10));
        assert_eq!(glyph_index('Z'), Some(35));
    }

    #[test]
    fn lowercase_is_uppercase() {
        for (lo, up) in ('a'..='z').zip('A'..='Z') {
            assert_eq!(glyph_index(lo), glyph_index(up));
        }
    }

    #[test]
    fn unsupported_chars_have_no_glyph() {
        for ch in [' ', '-', '!', 'é', '\n'] {
            assert_eq!(glyph_index(ch), None);
        }
    }

    #[test]
    fn glyphs_fit_five_columns() {
        for g in FONT_5X5.iter() {
            assert!(g.iter().all(|row| row & !0x1F == 0));
            assert!(g.iter().any(|&row| row != 0));
        }
    }

    #[test]
    fn zero_and_o_differ() {
        assert_ne!(glyph('0'), glyph('O'));
    }
}
