//! Deterministic random number generation for opponent moves and rollouts.
//!
//! Each `Environment` owns one `GameRng`. There is no process-wide random
//! source: the same seed and the same agent actions replay the same game.
//!
//! ```
//! use numeric_ttt::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//!
//! // Fork for an independent episode stream
//! let mut episode_rng = rng.fork();
//!
//! // Forks are deterministic: same seed, same fork counter, same sequence
//! let mut rng2 = GameRng::new(42);
//! let mut episode_rng2 = rng2.fork();
//! assert_eq!(episode_rng.gen_range_usize(0..1000), episode_rng2.gen_range_usize(0..1000));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable, forkable RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let offset = self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15);
        Self::new(self.seed.wrapping_add(offset))
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Get the current state for later restoration.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// Captured RNG position.
///
/// ChaCha8's word position makes capture O(1) regardless of how many
/// values have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}
