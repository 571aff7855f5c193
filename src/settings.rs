//! Game settings and tuning
//!
//! Every physics and layout constant of a session lives here so a host can
//! load a different tuning without recompiling. Stored as JSON: read from
//! LocalStorage on web, read from and written to a file on native.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Why a settings document was rejected
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("malformed settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("settings file error: {0}")]
    Io(#[from] std::io::Error),
    #[error("screen must have a positive size, got {width}x{height}")]
    EmptyScreen { width: f32, height: f32 },
    #[error("gap height {gap_height} must lie between 0 and the screen height {screen_height}")]
    GapOutOfRange { gap_height: f32, screen_height: f32 },
    #[error("obstacle width and speed must be positive")]
    DegenerateObstacle,
    #[error("a session needs at least one obstacle")]
    NoObstacles,
    #[error("actor size must be positive, got {0}")]
    EmptyActor(f32),
}

/// Tunable session parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub screen_width: f32,
    pub screen_height: f32,

    // === Actor ===
    pub actor_size: f32,
    /// Velocity gained per tick
    pub gravity: f32,
    /// Velocity a jump sets (overrides, not added)
    pub jump_impulse: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub gap_height: f32,
    pub obstacle_speed: f32,
    pub obstacle_count: usize,
    pub obstacle_spacing: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            actor_size: ACTOR_SIZE,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_count: OBSTACLE_COUNT,
            obstacle_spacing: OBSTACLE_SPACING,
        }
    }
}

impl Settings {
    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the preconditions a session asserts on construction
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0) {
            return Err(SettingsError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if !(self.gap_height > 0.0 && self.gap_height < self.screen_height) {
            return Err(SettingsError::GapOutOfRange {
                gap_height: self.gap_height,
                screen_height: self.screen_height,
            });
        }
        if !(self.obstacle_width > 0.0 && self.obstacle_speed > 0.0) {
            return Err(SettingsError::DegenerateObstacle);
        }
        if self.obstacle_count == 0 {
            return Err(SettingsError::NoObstacles);
        }
        if !(self.actor_size > 0.0) {
            return Err(SettingsError::EmptyActor(self.actor_size));
        }
        Ok(())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "flappy_settings";

    /// Load settings from LocalStorage, falling back to defaults (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Write settings to a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, path: &std::path::Path) -> Result<(), SettingsError> {
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.screen_width, 400.0);
        assert_eq!(settings.screen_height, 600.0);
        assert_eq!(settings.obstacle_count, 2);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "gravity": 0.05, "obstacle_count": 3 }"#)
            .expect("valid settings");
        assert!((settings.gravity - 0.05).abs() < f32::EPSILON);
        assert_eq!(settings.obstacle_count, 3);
        assert_eq!(settings.gap_height, GAP_HEIGHT);
        assert_eq!(settings.jump_impulse, JUMP_IMPULSE);
    }

    #[test]
    fn test_rejects_gap_taller_than_screen() {
        let result = Settings::from_json(r#"{ "screen_height": 300, "gap_height": 350 }"#);
        assert!(matches!(result, Err(SettingsError::GapOutOfRange { .. })));

        // Equal is rejected too: there would be no room to randomize the gap
        let result = Settings::from_json(r#"{ "screen_height": 350, "gap_height": 350 }"#);
        assert!(matches!(result, Err(SettingsError::GapOutOfRange { .. })));
    }

    #[test]
    fn test_rejects_degenerate_values() {
        assert!(matches!(
            Settings::from_json(r#"{ "screen_width": 0 }"#),
            Err(SettingsError::EmptyScreen { .. })
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "obstacle_count": 0 }"#),
            Err(SettingsError::NoObstacles)
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "obstacle_speed": -1 }"#),
            Err(SettingsError::DegenerateObstacle)
        ));
    }

    #[test]
    fn test_rejects_non_positive_gap_and_actor() {
        // A negative gap makes the top segment overlap the bottom one
        assert!(matches!(
            Settings::from_json(r#"{ "gap_height": -100 }"#),
            Err(SettingsError::GapOutOfRange { .. })
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "gap_height": 0 }"#),
            Err(SettingsError::GapOutOfRange { .. })
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "actor_size": 0 }"#),
            Err(SettingsError::EmptyActor(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{ "actor_size": -30 }"#),
            Err(SettingsError::EmptyActor(_))
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Parse(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::default();
        settings.obstacle_spacing = 275.0;
        let json = settings.to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("valid"), settings);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = Settings::load(std::path::Path::new("/definitely/not/here.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_save_then_load_file() {
        let path =
            std::env::temp_dir().join(format!("flappy_settings_{}.json", std::process::id()));
        let mut settings = Settings::default();
        settings.gravity = 0.04;
        settings.obstacle_count = 3;

        settings.save(&path).expect("writable temp dir");
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.expect("valid settings"), settings);
    }
}
