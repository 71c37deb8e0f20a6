//! Environment configuration.

use serde::{Deserialize, Serialize};

/// Configuration for an `Environment`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvConfig {
    /// Seed for the environment's RNG.
    /// Same seed and same agent actions produce identical games.
    pub seed: u64,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl EnvConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
