use serde::{Deserialize, Serialize};

use crate::defaults::{DEFAULT_THINK_DELAY_MAX_MS, DEFAULT_THINK_DELAY_MIN_MS, MAX_THINK_DELAY_MS};
use crate::games::tictactoe::Difficulty;
use super::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    pub think_delay_min_ms: u64,
    pub think_delay_max_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            think_delay_min_ms: DEFAULT_THINK_DELAY_MIN_MS,
            think_delay_max_ms: DEFAULT_THINK_DELAY_MAX_MS,
        }
    }
}

impl Validate for EngineConfig {
    fn validate(&self) -> Result<(), String> {
        if self.think_delay_min_ms > self.think_delay_max_ms {
            return Err(format!(
                "Think delay min ({} ms) cannot exceed max ({} ms)",
                self.think_delay_min_ms, self.think_delay_max_ms
            ));
        }
        if self.think_delay_max_ms > MAX_THINK_DELAY_MS {
            return Err(format!(
                "Think delay max ({} ms) cannot exceed {} ms",
                self.think_delay_max_ms, MAX_THINK_DELAY_MS
            ));
        }
        Ok(())
    }
}
