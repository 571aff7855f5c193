//! Flappy - a single-screen gravity-and-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, collisions, scoring)
//! - `renderer`: Drawing surface abstraction and frame composition
//! - `platform`: Frame clock and input mapping
//! - `settings`: Data-driven game tuning

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

/// Game configuration constants (defaults for [`Settings`])
pub mod consts {
    /// Simulation step length in milliseconds (one display refresh at 60 Hz)
    pub const TICK_MS: f64 = 1000.0 / 60.0;
    /// Maximum ticks run for a single frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Frame gaps longer than this are clamped (tab switch, debugger pause)
    pub const MAX_FRAME_GAP_MS: f64 = 250.0;

    /// Playfield dimensions
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Actor defaults
    pub const ACTOR_SIZE: f32 = 30.0;
    /// Downward acceleration, added to velocity every tick
    pub const GRAVITY: f32 = 0.025;
    /// Velocity set by a jump (negative = upward)
    pub const JUMP_IMPULSE: f32 = -2.5;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 100.0;
    pub const GAP_HEIGHT: f32 = 350.0;
    /// Leftward scroll per tick
    pub const OBSTACLE_SPEED: f32 = 2.0;
    pub const OBSTACLE_COUNT: usize = 2;
    /// Horizontal distance between obstacles at session start
    pub const OBSTACLE_SPACING: f32 = 350.0;
}
