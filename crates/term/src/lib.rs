//! Terminal "display" module.
//!
//! The arcade's physical target is a 16x16 LED matrix; this crate stands in
//! for it on a terminal. It renders the core's pixel frame into a simple cell
//! buffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Only write cells that changed since the last frame
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per pixel)

pub mod fb;
pub mod pixel_view;
pub mod renderer;

pub use pixel_arcade_core as core;
pub use pixel_arcade_types as types;

pub use fb::{Cell, CellBuffer, CellStyle, Rgb};
pub use pixel_view::{brightness_scale, AnchorY, PixelView, StatusLine, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
