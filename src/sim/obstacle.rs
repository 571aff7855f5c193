//! Scrolling gap obstacles (pipe pairs)
//!
//! Obstacles are never destroyed. Once one scrolls fully past the left edge it
//! is moved back to the right edge with a new gap, so the session's obstacle
//! collection behaves like a ring.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use crate::settings::Settings;

/// An axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// A pair of solid segments with a passable gap between them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Top of the gap, in [0, screen_height - gap_height]
    pub gap_y: f32,
    pub width: f32,
    pub gap_height: f32,
    /// Leftward scroll per tick
    pub speed: f32,
    /// Playfield size, for recycling and drawing the bottom segment
    pub screen_width: f32,
    pub screen_height: f32,
    /// Whether the current pass has already been scored
    #[serde(default)]
    pub scored: bool,
}

impl Obstacle {
    pub fn new<R: Rng + ?Sized>(x: f32, settings: &Settings, rng: &mut R) -> Self {
        let mut obstacle = Self {
            x,
            gap_y: 0.0,
            width: settings.obstacle_width,
            gap_height: settings.gap_height,
            speed: settings.obstacle_speed,
            screen_width: settings.screen_width,
            screen_height: settings.screen_height,
            scored: false,
        };
        obstacle.randomize_gap(rng);
        obstacle
    }

    /// Scroll left one tick. Returns true if the obstacle was recycled.
    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.x -= self.speed;
        if self.x < -self.width {
            self.reset(self.screen_width, rng);
            return true;
        }
        false
    }

    /// Move to `x` with a fresh gap and no recorded pass
    pub fn reset<R: Rng + ?Sized>(&mut self, x: f32, rng: &mut R) {
        self.x = x;
        self.scored = false;
        self.randomize_gap(rng);
    }

    fn randomize_gap<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        // Half-open range; the max is positive by session precondition
        self.gap_y = rng.random_range(0.0..self.max_gap_offset());
    }

    /// True once the actor has fully cleared this obstacle
    pub fn passed(&self, actor: &Actor) -> bool {
        self.right_edge() < actor.pos.x
    }

    #[inline]
    pub fn max_gap_offset(&self) -> f32 {
        self.screen_height - self.gap_height
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_y
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_y + self.gap_height
    }

    /// Solid segment from the top of the screen down to the gap
    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_top())
    }

    /// Solid segment from the end of the gap down to the bottom of the screen
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.gap_bottom(),
            self.width,
            self.screen_height - self.gap_bottom(),
        )
    }
}
