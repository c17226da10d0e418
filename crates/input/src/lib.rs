//! Terminal input module (engine-facing).
//!
//! Turns `crossterm` key events into the single button level the arcade
//! core consumes each tick, including on terminals without key-release
//! events.

pub mod handler;
pub mod map;

pub use pixel_arcade_types as types;

pub use handler::ButtonInput;
pub use map::{is_button_key, is_long_press_key, should_quit};
