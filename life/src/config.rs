//! Simulation configuration, optionally loaded from a JSON file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Driver-facing settings, supplied once at startup. Missing fields fall
/// back to their defaults, so a config file only needs the overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Grid dimension; the board is `dimension` x `dimension` cells.
    pub dimension: usize,
    /// Probability for a cell to start alive when seeding randomly.
    pub probability: f32,
    /// Seed randomly; when false every cell starts dead.
    pub use_random: bool,
    /// Start with the simulation paused.
    pub start_paused: bool,
    /// Generations to run before the board is reseeded automatically.
    pub lifetime: u32,
    /// Milliseconds between generations while running.
    pub tick_ms: u64,
    /// Overlay each live cell's neighbor count on the board.
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dimension: 100,
            probability: 0.1,
            use_random: true,
            start_paused: true,
            lifetime: 10_000,
            tick_ms: 100,
            debug: false,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

impl Config {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension < 1 {
            return Err(ConfigError::Invalid("dimension must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(ConfigError::Invalid(format!(
                "probability must be within [0, 1], got {}",
                self.probability
            )));
        }
        if self.lifetime < 1 {
            return Err(ConfigError::Invalid("lifetime must be at least 1".into()));
        }
        if self.tick_ms < 1 {
            return Err(ConfigError::Invalid("tick_ms must be at least 1".into()));
        }
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.dimension, 100);
        assert_eq!(config.probability, 0.1);
        assert!(config.use_random);
        assert!(config.start_paused);
        assert_eq!(config.lifetime, 10_000);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert!(!config.debug);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"dimension": 25, "tick_ms": 50}"#).unwrap();
        assert_eq!(config.dimension, 25);
        assert_eq!(config.tick_ms, 50);
        assert_eq!(config.probability, 0.1);
        assert!(config.start_paused);
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            dimension: 40,
            probability: 0.25,
            use_random: false,
            start_paused: false,
            lifetime: 500,
            tick_ms: 20,
            debug: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.dimension, 40);
        assert_eq!(back.probability, 0.25);
        assert!(!back.use_random);
        assert!(!back.start_paused);
        assert_eq!(back.lifetime, 500);
        assert_eq!(back.tick_ms, 20);
        assert!(back.debug);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let bad = Config {
            dimension: 0,
            ..Config::default()
        };
        assert!(matches!(bad.validate(), Err(ConfigError::Invalid(_))));

        let bad = Config {
            probability: 1.5,
            ..Config::default()
        };
        assert!(bad.validate().is_err());

        let bad = Config {
            probability: -0.1,
            ..Config::default()
        };
        assert!(bad.validate().is_err());

        let bad = Config {
            lifetime: 0,
            ..Config::default()
        };
        assert!(bad.validate().is_err());

        let bad = Config {
            tick_ms: 0,
            ..Config::default()
        };
        assert!(bad.validate().is_err());
    }
}
