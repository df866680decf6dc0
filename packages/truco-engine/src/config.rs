use std::env;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub const DEFAULT_MAX_POINTS: u8 = 30;
const MIN_MAX_POINTS: u8 = 2;
const MAX_MAX_POINTS: u8 = 100;

/// Scoring rules fixed for the lifetime of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Points needed to win the game.
    pub max_points: u8,
    /// Whether the flor sub-game is played.
    pub flor_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_points: DEFAULT_MAX_POINTS,
            flor_enabled: false,
        }
    }
}

impl GameConfig {
    pub fn new(max_points: u8, flor_enabled: bool) -> Result<Self, EngineError> {
        let config = Self {
            max_points,
            flor_enabled,
        };
        config.validate()?;
        Ok(config)
    }

    /// Build a config from `TRUCO_MAX_POINTS` / `TRUCO_FLOR_ENABLED`.
    ///
    /// Missing variables fall back to the defaults; present but unparsable
    /// values are rejected.
    pub fn from_env() -> Result<Self, EngineError> {
        let defaults = Self::default();
        let max_points = match env::var("TRUCO_MAX_POINTS") {
            Ok(raw) => raw.trim().parse::<u8>().map_err(|_| {
                EngineError::config(format!(
                    "TRUCO_MAX_POINTS must be a number between {MIN_MAX_POINTS} and {MAX_MAX_POINTS}, got '{raw}'"
                ))
            })?,
            Err(_) => defaults.max_points,
        };
        let flor_enabled = match env::var("TRUCO_FLOR_ENABLED") {
            Ok(raw) => parse_flag(&raw).ok_or_else(|| {
                EngineError::config(format!("TRUCO_FLOR_ENABLED must be a boolean, got '{raw}'"))
            })?,
            Err(_) => defaults.flor_enabled,
        };
        Self::new(max_points, flor_enabled)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(MIN_MAX_POINTS..=MAX_MAX_POINTS).contains(&self.max_points) {
            return Err(EngineError::config(format!(
                "max_points must be in {MIN_MAX_POINTS}..={MAX_MAX_POINTS}, got {}",
                self.max_points
            )));
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
