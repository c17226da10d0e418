//! Core arcade logic - pure, deterministic, and testable
//!
//! Everything that decides what appears on the 16x16 matrix lives here. There
//! is no terminal, clock, or file I/O in the tick path: the host feeds one
//! boolean per frame and gets a [`FrameBuffer`] back.
//!
//! # Module Structure
//!
//! - [`frame`], [`font`], [`text`]: the pixel buffer and text/score drawing
//! - [`input`]: edge detection and long/short press classification
//! - [`games`]: the [`Game`] contract, the four games, and their registry
//! - [`selection`]: title screen, game switching and lifecycle
//! - [`console`]: the per-frame driver that owns all of the above
//! - [`bitgrid`], [`difficulty`], [`rng`]: building blocks shared by the games
//! - [`config`]: tuning tables, optionally loaded from TOML
//!
//! # Controls
//!
//! The whole arcade runs off a single button:
//!
//! - **Title screen**: hold for [`LONG_PRESS_TICKS`](types::LONG_PRESS_TICKS)
//!   to show the next game; tap to start the one shown
//! - **Runner**: hold to jump
//! - **Dodger**: tap to move one lane right (wrapping)
//! - **Stacker**: tap to fire a block upward
//! - **Calibrator**: tap to step brightness; hold to leave
//! - **Game over**: tap (after a short delay) to return to the title
//!
//! # Example
//!
//! ```
//! use pixel_arcade_core::{ArcadeConfig, Console, Screen};
//! use pixel_arcade_core::types::VariantKind;
//!
//! let mut console = Console::new(ArcadeConfig::default(), 12345)
//!     .with_selection(VariantKind::Dodger);
//!
//! // Tap to start
//! console.tick(true);
//! console.tick(false);
//! assert_eq!(console.screen(), Screen::Playing);
//!
//! // Countdown digits appear on the frame
//! let frame = console.tick(false);
//! assert!(!frame.is_blank());
//! ```
//!
//! # Timing
//!
//! One call to [`Console::tick`] is one frame; the host runs it every
//! [`TICK_MS`](types::TICK_MS) milliseconds. All durations in the games are
//! counted in ticks.

pub mod bitgrid;
pub mod config;
pub mod console;
pub mod context;
pub mod difficulty;
pub mod error;
pub mod font;
pub mod frame;
pub mod games;
pub mod input;
pub mod rng;
pub mod score;
pub mod selection;
pub mod text;

pub use pixel_arcade_types as types;

// Re-export commonly used types for convenience
pub use bitgrid::BitGrid;
pub use config::{ArcadeConfig, CalibratorTuning, DodgerTuning, RunnerTuning, StackerTuning};
pub use console::Console;
pub use context::TickContext;
pub use difficulty::DifficultyLadder;
pub use error::{ConfigError, ConfigResult};
pub use frame::FrameBuffer;
pub use games::{Calibrator, Dodger, Game, GameSlot, Runner, Stacker, REGISTRY};
pub use input::{ButtonState, PressEvent, PressTracker};
pub use rng::SimpleRng;
pub use score::{NullSink, ScoreSink, Scoreboard};
pub use selection::{Screen, Selector};
pub use text::{draw_score, draw_text, TitleScroller};
