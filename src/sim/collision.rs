//! Collision detection and pass scoring
//!
//! The actor is an axis-aligned square and each obstacle is two rectangles
//! around a gap, so every check here is a handful of interval comparisons.

use super::actor::Actor;
use super::obstacle::Obstacle;

/// Result of evaluating the actor against every obstacle for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Index of the first obstacle (in collection order) the actor hit
    pub collision: Option<usize>,
    /// Obstacles cleared for the first time this tick, already marked scored
    pub passed: Vec<usize>,
}

impl Evaluation {
    pub fn points(&self) -> u32 {
        self.passed.len() as u32
    }
}

/// Check whether the actor's bounding square overlaps either solid segment.
///
/// Horizontal overlap is open on both sides. Vertically the actor is safe while
/// `gap_top <= y` and `y + size <= gap_bottom`, so touching the gap edges
/// exactly is not a hit.
pub fn actor_hits_obstacle(actor: &Actor, obstacle: &Obstacle) -> bool {
    let overlaps_x = actor.right_edge() > obstacle.x && actor.pos.x < obstacle.right_edge();
    let outside_gap =
        actor.pos.y < obstacle.gap_top() || actor.bottom_edge() > obstacle.gap_bottom();
    overlaps_x && outside_gap
}

/// Check if the actor dropped below the bottom of the screen.
/// There is no matching ceiling check; flying above the top is allowed.
pub fn actor_fell_off_screen(actor: &Actor, screen_height: f32) -> bool {
    actor.pos.y > screen_height
}

/// Walk the obstacles in order: the first collision stops the walk, otherwise
/// each obstacle that has been cleared and not yet scored is scored once.
pub fn evaluate(actor: &Actor, obstacles: &mut [Obstacle]) -> Evaluation {
    let mut result = Evaluation::default();

    for (index, obstacle) in obstacles.iter_mut().enumerate() {
        if actor.collides_with(obstacle) {
            result.collision = Some(index);
            break;
        }
        if !obstacle.scored && obstacle.passed(actor) {
            obstacle.scored = true;
            result.passed.push(index);
        }
    }

    result
}
