//! The falling, player-controlled actor

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::actor_hits_obstacle;
use super::obstacle::Obstacle;
use crate::settings::Settings;

/// The actor (bird). Its bounding box is a square of side `size` whose
/// top-left corner is `pos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner; x never changes after spawn
    pub pos: Vec2,
    /// Vertical velocity in pixels/tick (positive = downward)
    pub velocity: f32,
    /// Diameter of the actor
    pub size: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
}

impl Actor {
    pub fn new(pos: Vec2, settings: &Settings) -> Self {
        Self {
            pos,
            velocity: 0.0,
            size: settings.actor_size,
            gravity: settings.gravity,
            jump_impulse: settings.jump_impulse,
        }
    }

    /// Integrate one tick of gravity. Position is deliberately unclamped;
    /// falling off the screen is detected by the session.
    pub fn update(&mut self) {
        self.velocity += self.gravity;
        self.pos.y += self.velocity;
    }

    /// Replace the current velocity with the jump impulse
    pub fn jump(&mut self) {
        self.velocity = self.jump_impulse;
    }

    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
        self.velocity = 0.0;
    }

    pub fn collides_with(&self, obstacle: &Obstacle) -> bool {
        actor_hits_obstacle(self, obstacle)
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.size
    }

    #[inline]
    pub fn bottom_edge(&self) -> f32 {
        self.pos.y + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}
