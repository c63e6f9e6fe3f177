//! Game configuration
//!
//! Tunables for the simulation, loadable from TOML with defaults matching
//! the original game's constants. Systems receive the sub-config they need
//! at construction; nothing reads configuration at frame time.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML for [`GameConfig`]
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Capacities fixed at construction time
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Entity table capacity (no growth during play)
    pub max_entities: u32,
    /// Message bus capacity per frame
    pub max_messages: usize,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            max_entities: 64,
            max_messages: 1024,
        }
    }
}

/// Player movement, aiming, and round-rule tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Movement speed in world units per second
    pub move_speed: f32,
    /// Degrees of look rotation per pixel of mouse travel
    pub look_sensitivity: f32,
    /// Pitch clamp in degrees (up and down)
    pub pitch_limit: f32,
    /// Seconds between shots
    pub shoot_cooldown: f32,
    /// Bullet speed in world units per second
    pub bullet_speed: f32,
    /// Number of recyclable bullet slots (tags bullet_0 .. bullet_N-1)
    pub num_bullets: u32,
    /// Score that wins the round
    pub win_score: u32,
    /// Round length in seconds
    pub round_time: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            look_sensitivity: 0.1,
            pitch_limit: 89.0,
            shoot_cooldown: 0.5,
            bullet_speed: 30.0,
            num_bullets: 8,
            win_score: 4,
            round_time: 60.0,
        }
    }
}

/// Enemy patrol and animation tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Patrol speed in world units per second
    pub patrol_speed: f32,
    /// Seconds between animation frame flips
    pub frame_interval: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            patrol_speed: 2.0,
            frame_interval: 0.25,
        }
    }
}

/// Top-level game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Capacity settings
    pub world: WorldConfig,
    /// Player settings
    pub player: PlayerConfig,
    /// Enemy settings
    pub enemy: EnemyConfig,
}

impl GameConfig {
    /// Load configuration from a TOML file; missing keys fall back to
    /// defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = toml::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_rules() {
        let config = GameConfig::default();
        assert_eq!(config.player.win_score, 4);
        assert_eq!(config.world.max_messages, 1024);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            [player]
            move_speed = 8.0
            "#,
        )
        .unwrap();
        assert_eq!(config.player.move_speed, 8.0);
        assert_eq!(config.player.win_score, 4);
        assert_eq!(config.enemy.patrol_speed, 2.0);
    }
}
