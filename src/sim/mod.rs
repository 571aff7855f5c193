//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod actor;
pub mod collision;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use collision::{Evaluation, actor_fell_off_screen, actor_hits_obstacle, evaluate};
pub use obstacle::{Obstacle, Rect};
pub use state::{
    GameEvent, GamePhase, GameState, InputEvent, initial_actor_pos, initial_obstacle_x,
};
pub use tick::{TickInput, tick};
