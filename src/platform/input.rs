//! Input mapping
//!
//! Translates pointer clicks and key presses into game input. A click means
//! "jump" while playing and "restart" once the run is over; the keyboard has
//! a dedicated key for each.

use crate::sim::{GamePhase, InputEvent};

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Forward to the session
    Game(InputEvent),
    /// Flip demo mode on or off
    ToggleAutopilot,
}

/// Map a pointer click or tap
pub fn map_pointer(phase: GamePhase) -> InputEvent {
    match phase {
        GamePhase::Playing => InputEvent::Jump,
        GamePhase::GameOver => InputEvent::Restart,
    }
}

/// Map a key press, by its DOM `KeyboardEvent.key` name.
///
/// Space jumps only while playing and Enter restarts only after game over;
/// otherwise the press is dropped here rather than queued.
pub fn map_key(key: &str, phase: GamePhase) -> Option<KeyAction> {
    match (key, phase) {
        (" " | "Spacebar", GamePhase::Playing) => Some(KeyAction::Game(InputEvent::Jump)),
        ("Enter", GamePhase::GameOver) => Some(KeyAction::Game(InputEvent::Restart)),
        ("a" | "A", _) => Some(KeyAction::ToggleAutopilot),
        _ => None,
    }
}
