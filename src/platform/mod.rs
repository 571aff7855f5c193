//! Platform abstraction layer
//!
//! Host-agnostic pieces every frontend needs:
//! - Frame timing (display refresh to simulation ticks)
//! - Input mapping (clicks and keys to game input)

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{KeyAction, map_key, map_pointer};
