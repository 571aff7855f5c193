//! Frame composition: what a session looks like on a surface

use super::surface::{Drawable, Surface, colors};
use crate::sim::{Actor, GameState, Obstacle, Rect};

/// HUD text sizes
pub const SCORE_FONT_SIZE: f32 = 13.0;
pub const GAME_OVER_FONT_SIZE: f32 = 48.0;
pub const RESTART_HINT_FONT_SIZE: f32 = 24.0;

impl Drawable for Actor {
    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_oval(self.pos.x, self.pos.y, self.size, self.size, colors::ACTOR);
    }
}

impl Drawable for Obstacle {
    fn draw(&self, surface: &mut dyn Surface) {
        for rect in [self.top_rect(), self.bottom_rect()] {
            surface.fill_rect(rect.x, rect.y, rect.w, rect.h, colors::OBSTACLE);
        }
    }
}

/// Draw a whole frame: clear, actor, obstacles, score, then the game-over
/// overlay if the run has ended
pub fn draw_frame(state: &GameState, surface: &mut dyn Surface) {
    let width = state.settings.screen_width;
    let height = state.settings.screen_height;

    surface.clear(Rect::new(0.0, 0.0, width, height));

    state.actor.draw(surface);
    for obstacle in &state.obstacles {
        obstacle.draw(surface);
    }

    if state.is_game_over() {
        draw_game_over(surface, width, height);
    }
    draw_score(surface, state.score);
}

fn draw_score(surface: &mut dyn Surface, score: u32) {
    surface.fill_text(
        &format!("Score: {}", score),
        10.0,
        20.0,
        colors::SCORE_TEXT,
        SCORE_FONT_SIZE,
    );
}

fn draw_game_over(surface: &mut dyn Surface, width: f32, height: f32) {
    surface.fill_text(
        "Game Over",
        width / 2.0 - 100.0,
        height / 2.0 - 10.0,
        colors::GAME_OVER_TEXT,
        GAME_OVER_FONT_SIZE,
    );
    surface.fill_text(
        "Press Enter to Restart",
        width / 2.0 - 110.0,
        height / 2.0 + 30.0,
        colors::GAME_OVER_TEXT,
        RESTART_HINT_FONT_SIZE,
    );
}
