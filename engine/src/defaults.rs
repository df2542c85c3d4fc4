pub const DEFAULT_THINK_DELAY_MIN_MS: u64 = 1000;
pub const DEFAULT_THINK_DELAY_MAX_MS: u64 = 3000;
pub const MAX_THINK_DELAY_MS: u64 = 60_000;

pub const MEDIUM_RANDOM_MOVE_CHANCE: f64 = 0.10;
