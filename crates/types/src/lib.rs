//! Shared types and constants for the pixel arcade.
//!
//! Everything here is plain data with no external dependencies so it can be
//! used by the simulation core, the terminal front end and tests alike.
//!
//! # Display
//!
//! - **Width**: 16 columns (indexed 0-15, left to right)
//! - **Height**: 16 rows (indexed 0-15, top to bottom)
//! - **Palette**: 8 fixed color indices (see [`Color`])
//!
//! # Timing
//!
//! All durations are counted in ticks. One tick is one display frame.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Host frame interval (~60 FPS) |
//! | `LONG_PRESS_TICKS` | 20 | Hold length that counts as a long press |
//! | `COUNTDOWN_TICKS` | 180 | 3-2-1 countdown before play |
//! | `GAME_OVER_INPUT_DELAY_TICKS` | 30 | Input ignored after a game over |
//! | `LINE_CLEAR_HOLD_TICKS` | 15 | Stacker line-clear flash |
//! | `BRIGHTNESS_HOLD_TICKS` | 90 | Calibrator level display |
//!
//! # Examples
//!
//! ```
//! use pixel_arcade_types::{Color, VariantKind, SCREEN_WIDTH, SCREEN_HEIGHT};
//!
//! assert_eq!(SCREEN_WIDTH, 16);
//! assert_eq!(SCREEN_HEIGHT, 16);
//!
//! assert_eq!(Color::from_index(3), Some(Color::Yellow));
//! assert_eq!(VariantKind::Calibrator.next(), VariantKind::Runner);
//! assert_eq!(VariantKind::from_name("dodger"), Some(VariantKind::Dodger));
//! ```

/// Display width in pixels (16 columns)
pub const SCREEN_WIDTH: i32 = 16;

/// Display height in pixels (16 rows)
pub const SCREEN_HEIGHT: i32 = 16;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Consecutive held ticks that turn a press into a long press.
pub const LONG_PRESS_TICKS: u32 = 20;

/// Countdown length before gameplay starts (three numbers, one second each).
pub const COUNTDOWN_TICKS: u32 = 180;

/// Ticks each countdown digit stays on screen.
pub const COUNTDOWN_TICKS_PER_DIGIT: u32 = 60;

/// Ticks after a game over during which the button is ignored.
pub const GAME_OVER_INPUT_DELAY_TICKS: u32 = 30;

/// Duration of the Stacker line-clear flash before rows are removed.
pub const LINE_CLEAR_HOLD_TICKS: u32 = 15;

/// How long the Calibrator shows the selected level after a change.
pub const BRIGHTNESS_HOLD_TICKS: u32 = 90;

/// Scroll step applied to title text each call (pixels per tick).
pub const TITLE_SCROLL_STEP: f32 = 0.5;

/// Glyph cell size (5x5 bitmap).
pub const GLYPH_SIZE: i32 = 5;

/// Horizontal advance per glyph (5 wide + 1 spacing).
pub const GLYPH_ADVANCE: i32 = 6;

/// Number of selectable variants.
pub const VARIANT_COUNT: usize = 4;

/// Number of difficulty levels every simulation table provides.
pub const DIFFICULTY_LEVELS: usize = 4;

/// Score thresholds between difficulty levels (one fewer than levels).
pub const DIFFICULTY_THRESHOLDS: usize = DIFFICULTY_LEVELS - 1;

/// Default brightness ladder applied by the Calibrator.
pub const BRIGHTNESS_LEVELS: [u8; 8] = [0, 4, 8, 16, 32, 64, 128, 255];

/// Brightness in effect at power-on.
pub const DEFAULT_BRIGHTNESS: u8 = 16;

/// The fixed 8-entry display palette.
///
/// The numeric value of each variant is the color index stored in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Color {
    #[default]
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl Color {
    /// All palette entries in index order.
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Palette index (0-7)
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a palette entry by index
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_arcade_types::Color;
    ///
    /// assert_eq!(Color::from_index(0), Some(Color::Black));
    /// assert_eq!(Color::from_index(7), Some(Color::White));
    /// assert_eq!(Color::from_index(9), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Nominal RGB value for this palette entry at full brightness.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Black => (0, 0, 0),
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Yellow => (255, 255, 0),
            Color::Blue => (0, 0, 255),
            Color::Magenta => (255, 0, 255),
            Color::Cyan => (0, 255, 255),
            Color::White => (255, 255, 255),
        }
    }
}

/// The selectable mini-games, in menu order.
///
/// - **Runner**: jump over walls rising from the floor
/// - **Dodger**: switch lanes to slip through gaps in falling walls
/// - **Stacker**: shoot blocks into a descending field to complete rows
/// - **Calibrator**: pick the display brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Runner,
    Dodger,
    Stacker,
    Calibrator,
}

impl VariantKind {
    /// Menu order.
    pub const ALL: [VariantKind; VARIANT_COUNT] = [
        VariantKind::Runner,
        VariantKind::Dodger,
        VariantKind::Stacker,
        VariantKind::Calibrator,
    ];

    /// Position in the menu
    pub fn index(self) -> usize {
        match self {
            VariantKind::Runner => 0,
            VariantKind::Dodger => 1,
            VariantKind::Stacker => 2,
            VariantKind::Calibrator => 3,
        }
    }

    /// Next variant in menu order, wrapping after the last one
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_arcade_types::VariantKind;
    ///
    /// assert_eq!(VariantKind::Runner.next(), VariantKind::Dodger);
    /// assert_eq!(VariantKind::Calibrator.next(), VariantKind::Runner);
    /// ```
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % VARIANT_COUNT]
    }

    /// Parse a variant name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "runner" | "jump" => Some(VariantKind::Runner),
            "dodger" | "dodge" => Some(VariantKind::Dodger),
            "stacker" | "stack" => Some(VariantKind::Stacker),
            "calibrator" | "brightness" => Some(VariantKind::Calibrator),
            _ => None,
        }
    }

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            VariantKind::Runner => "runner",
            VariantKind::Dodger => "dodger",
            VariantKind::Stacker => "stacker",
            VariantKind::Calibrator => "calibrator",
        }
    }
}
