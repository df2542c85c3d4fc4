use std::time::Duration;

use crate::config::EngineConfig;
use crate::defaults::{DEFAULT_THINK_DELAY_MAX_MS, DEFAULT_THINK_DELAY_MIN_MS};
use super::types::Difficulty;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicTacToeSessionSettings {
    pub difficulty: Difficulty,
    pub think_delay_min: Duration,
    pub think_delay_max: Duration,
}

impl TicTacToeSessionSettings {
    /// No pause before the computer replies.
    pub fn instant(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            think_delay_min: Duration::ZERO,
            think_delay_max: Duration::ZERO,
        }
    }
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            think_delay_min: Duration::from_millis(DEFAULT_THINK_DELAY_MIN_MS),
            think_delay_max: Duration::from_millis(DEFAULT_THINK_DELAY_MAX_MS),
        }
    }
}

impl From<&EngineConfig> for TicTacToeSessionSettings {
    fn from(config: &EngineConfig) -> Self {
        Self {
            difficulty: config.difficulty,
            think_delay_min: Duration::from_millis(config.think_delay_min_ms),
            think_delay_max: Duration::from_millis(config.think_delay_max_ms),
        }
    }
}
