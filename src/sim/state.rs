//! Session state and core simulation types
//!
//! Everything a session needs to keep playing lives in [`GameState`], including
//! the RNG, so a state can be snapshotted and resumed deterministically.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::obstacle::Obstacle;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// Run ended, waiting for a restart
    GameOver,
}

/// Discrete input delivered by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Jump,
    Restart,
}

/// Notable things that happened during a tick, for hosts that react to them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// An obstacle was cleared; carries the new score
    Scored { score: u32 },
    /// The actor hit the obstacle at this index
    Crashed { obstacle: usize },
    /// The actor dropped below the screen
    FellOff,
    /// A new run started
    Restarted,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub settings: Settings,
    pub actor: Actor,
    /// Update and draw order; not otherwise significant
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub phase: GamePhase,
    /// Simulation tick counter (not reset by restart)
    pub time_ticks: u64,
    /// Gap generator
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a new session with gaps drawn from a seeded RNG
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!("New session with seed {}", seed);
        Self::with_rng(settings, Pcg32::seed_from_u64(seed))
    }

    /// Create a new session drawing gaps from the given RNG.
    ///
    /// # Panics
    ///
    /// If the settings violate a session precondition (see
    /// [`Settings::validate`]): gameplay would be undefined.
    pub fn with_rng(settings: Settings, mut rng: Pcg32) -> Self {
        if let Err(e) = settings.validate() {
            panic!("invalid session settings: {}", e);
        }

        let actor = Actor::new(initial_actor_pos(&settings), &settings);
        let obstacles = (0..settings.obstacle_count)
            .map(|i| Obstacle::new(initial_obstacle_x(&settings, i), &settings, &mut rng))
            .collect();

        Self {
            settings,
            actor,
            obstacles,
            score: 0,
            phase: GamePhase::Playing,
            time_ticks: 0,
            rng,
        }
    }

    /// Route an input event according to the current phase.
    ///
    /// Jump only acts while playing and restart only acts after game over;
    /// everything else is dropped.
    pub fn handle_input(&mut self, event: InputEvent) -> Option<GameEvent> {
        match (self.phase, event) {
            (GamePhase::Playing, InputEvent::Jump) => {
                self.actor.jump();
                None
            }
            (GamePhase::GameOver, InputEvent::Restart) => {
                self.restart();
                Some(GameEvent::Restarted)
            }
            (phase, event) => {
                log::trace!("Ignoring {:?} during {:?}", event, phase);
                None
            }
        }
    }

    /// Start a new run: score zero, actor and obstacles back to their spawn
    /// positions, fresh gaps. The obstacle count never changes.
    pub fn restart(&mut self) {
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.actor.reset(initial_actor_pos(&self.settings));
        for (i, obstacle) in self.obstacles.iter_mut().enumerate() {
            obstacle.reset(initial_obstacle_x(&self.settings, i), &mut self.rng);
        }
        log::info!("Session restarted at tick {}", self.time_ticks);
    }

    /// End the run. Returns false if it was already over.
    pub(crate) fn end_run(&mut self) -> bool {
        if self.phase == GamePhase::GameOver {
            return false;
        }
        self.phase = GamePhase::GameOver;
        log::info!("Game over with score {}", self.score);
        true
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// The nearest obstacle the actor has not cleared yet
    pub fn next_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .filter(|o| o.right_edge() >= self.actor.pos.x)
            .min_by(|a, b| a.x.total_cmp(&b.x))
    }
}

/// Spawn point of the actor: a quarter across, half way down
pub fn initial_actor_pos(settings: &Settings) -> Vec2 {
    Vec2::new(settings.screen_width / 4.0, settings.screen_height / 2.0)
}

/// Spawn x of the `index`th obstacle: staggered off the right edge
pub fn initial_obstacle_x(settings: &Settings, index: usize) -> f32 {
    settings.screen_width + index as f32 * settings.obstacle_spacing
}
