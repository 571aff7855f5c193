//! Per-frame simulation tick
//!
//! Core game loop that advances a session by one step. Input queued since the
//! previous tick is applied first, so input never interleaves with physics.

use super::collision::{actor_fell_off_screen, evaluate};
use super::state::{GameEvent, GamePhase, GameState, InputEvent};

/// How far below the middle of the next gap the autopilot lets the actor sink
/// before jumping, as a fraction of the gap height
const AUTOPILOT_SINK: f32 = 0.25;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events delivered since the previous tick, oldest first
    pub events: Vec<InputEvent>,
    /// Demo mode - the tick jumps on the player's behalf
    pub autopilot: bool,
}

impl TickInput {
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drop one-shot events after they have been processed
    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

/// Advance the session by one tick and report what happened.
///
/// The actor and obstacles move every tick, even after game over. Collisions,
/// scoring and the fall check only run while playing.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    for &event in &input.events {
        events.extend(state.handle_input(event));
    }

    if input.autopilot && autopilot_wants_jump(state) {
        state.actor.jump();
    }

    state.time_ticks += 1;

    state.actor.update();
    for (index, obstacle) in state.obstacles.iter_mut().enumerate() {
        if obstacle.update(&mut state.rng) {
            log::debug!("Obstacle {} recycled with gap at {:.1}", index, obstacle.gap_y);
        }
    }

    if state.phase == GamePhase::Playing {
        let result = evaluate(&state.actor, &mut state.obstacles);
        for _ in &result.passed {
            state.score += 1;
            log::debug!("Scored, now {}", state.score);
            events.push(GameEvent::Scored { score: state.score });
        }
        if let Some(obstacle) = result.collision {
            if state.end_run() {
                events.push(GameEvent::Crashed { obstacle });
            }
        }
    }

    if actor_fell_off_screen(&state.actor, state.settings.screen_height) && state.end_run() {
        events.push(GameEvent::FellOff);
    }

    events
}

/// Demo mode: jump once the actor, falling, sinks below the middle of the gap
/// it is heading for
fn autopilot_wants_jump(state: &GameState) -> bool {
    if state.phase != GamePhase::Playing || state.actor.velocity < 0.0 {
        return false;
    }
    let target = match state.next_obstacle() {
        Some(obstacle) => obstacle.gap_top() + obstacle.gap_height * (0.5 + AUTOPILOT_SINK),
        None => state.settings.screen_height / 2.0,
    };
    state.actor.bottom_edge() > target
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::state::initial_actor_pos;

    fn new_state() -> GameState {
        GameState::new(Settings::default(), 12345)
    }

    /// Put every gap in line with the actor so nothing can be hit
    fn open_all_gaps(state: &mut GameState) {
        let gap_y = state.actor.pos.y - 100.0;
        for obstacle in &mut state.obstacles {
            obstacle.gap_y = gap_y;
        }
    }

    #[test]
    fn test_gravity_accumulates_over_ticks() {
        let mut state = new_state();
        let input = TickInput::default();
        for k in 1..=40u32 {
            tick(&mut state, &input);
            assert!((state.actor.velocity - k as f32 * GRAVITY).abs() < 1e-4);
        }
        assert_eq!(state.time_ticks, 40);
    }

    #[test]
    fn test_jump_event_applies_before_physics() {
        let mut state = new_state();
        let idle = TickInput::default();
        for _ in 0..30 {
            tick(&mut state, &idle);
        }
        let mut input = TickInput::default();
        input.push(InputEvent::Jump);
        tick(&mut state, &input);
        assert!((state.actor.velocity - (JUMP_IMPULSE + GRAVITY)).abs() < 1e-5);
    }

    #[test]
    fn test_obstacles_scroll_each_tick() {
        let mut state = new_state();
        tick(&mut state, &TickInput::default());
        assert_eq!(state.obstacles[0].x, 400.0 - OBSTACLE_SPEED);
        assert_eq!(state.obstacles[1].x, 750.0 - OBSTACLE_SPEED);
    }

    #[test]
    fn test_scores_once_per_obstacle() {
        let mut state = new_state();
        let input = TickInput::default();
        // Obstacle 0 starts at 400 and clears the actor at x=100 once its right
        // edge drops below 100: x < 0 after 201 ticks.
        let mut scored_ticks = Vec::new();
        for t in 1..=260u64 {
            open_all_gaps(&mut state);
            state.actor.velocity = 0.0;
            state.actor.pos.y = 300.0;
            for event in tick(&mut state, &input) {
                if let GameEvent::Scored { .. } = event {
                    scored_ticks.push(t);
                }
            }
        }
        assert_eq!(scored_ticks, vec![201]);
        assert_eq!(state.score, 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_collision_ends_run() {
        let mut state = new_state();
        state.obstacles[0].x = initial_actor_pos(&state.settings).x;
        state.obstacles[0].gap_y = 0.0;
        state.actor.pos.y = 500.0; // below the gap (0..350)
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::Crashed { obstacle: 0 }]);
        assert!(state.is_game_over());
    }

    #[test]
    fn test_no_scoring_after_game_over() {
        let mut state = new_state();
        state.phase = GamePhase::GameOver;
        state.obstacles[0].x = -50.0;
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.score, 0);
        assert!(!state.obstacles[0].scored);
    }

    #[test]
    fn test_world_keeps_moving_after_game_over() {
        let mut state = new_state();
        state.phase = GamePhase::GameOver;
        let y = state.actor.pos.y;
        let x = state.obstacles[0].x;
        tick(&mut state, &TickInput::default());
        assert!(state.actor.pos.y > y);
        assert!(state.obstacles[0].x < x);
    }

    #[test]
    fn test_restart_event_starts_new_run() {
        let mut state = new_state();
        state.phase = GamePhase::GameOver;
        state.score = 3;
        let mut input = TickInput::default();
        input.push(InputEvent::Restart);
        let events = tick(&mut state, &input);
        assert_eq!(events.first(), Some(&GameEvent::Restarted));
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        // The restart is applied before this tick's physics
        assert!((state.actor.velocity - GRAVITY).abs() < 1e-6);
        assert_eq!(state.obstacles[0].x, 400.0 - OBSTACLE_SPEED);
    }

    #[test]
    fn test_falls_off_screen_without_input() {
        let mut state = new_state();
        let input = TickInput::default();
        let mut fell_at = None;
        let mut over_at = None;

        for t in 0..1000u32 {
            tick(&mut state, &input);
            if fell_at.is_none() && state.actor.pos.y > SCREEN_HEIGHT {
                fell_at = Some(t);
            }
            if state.is_game_over() && over_at.is_none() {
                over_at = Some(t);
            }
            if over_at.is_some() {
                assert!(state.is_game_over(), "game over must stick until restart");
            }
        }

        let fell_at = fell_at.expect("actor must drop below the screen");
        let over_at = over_at.expect("session must end");
        assert!(over_at <= fell_at);
    }

    #[test]
    fn test_fall_emits_event_once() {
        let mut state = new_state();
        open_all_gaps(&mut state);
        state.actor.pos.y = SCREEN_HEIGHT - 0.01;
        state.actor.velocity = 1.0;
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(events, vec![GameEvent::FellOff]);
        assert!(tick(&mut state, &TickInput::default()).is_empty());
    }

    #[test]
    fn test_autopilot_jumps_when_sinking_below_gap() {
        let mut state = new_state();
        open_all_gaps(&mut state);
        state.obstacles[0].gap_y = 100.0;
        state.obstacles[1].gap_y = 100.0;
        // Gap 100..450, target = 100 + 350 * 0.75 = 362.5
        state.actor.pos.y = 340.0; // bottom edge 370
        state.actor.velocity = 0.5;
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!(state.actor.velocity < 0.0);
    }

    #[test]
    fn test_autopilot_holds_while_high() {
        let mut state = new_state();
        state.obstacles[0].gap_y = 100.0;
        state.actor.pos.y = 150.0;
        state.actor.velocity = 0.5;
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert!(state.actor.velocity > 0.5);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(Settings::default(), 99999);
        let mut state2 = GameState::new(Settings::default(), 99999);

        let mut jump = TickInput::default();
        jump.push(InputEvent::Jump);
        let idle = TickInput::default();

        for t in 0..600 {
            let input = if t % 40 == 0 { &jump } else { &idle };
            tick(&mut state1, input);
            tick(&mut state2, input);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.actor, state2.actor);
        assert_eq!(state1.obstacles, state2.obstacles);
    }
}
