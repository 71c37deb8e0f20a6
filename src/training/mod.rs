//! Episode collection for training loops.
//!
//! - **Transition**: one agent decision and the environment's response
//! - **Episode**: a full game from an empty board to a terminal outcome
//! - **EpisodeStats**: win/loss/tie counts and mean reward over many games
//!
//! ## Usage
//!
//! ```
//! use numeric_ttt::core::EnvConfig;
//! use numeric_ttt::env::{Environment, UniformRandom};
//! use numeric_ttt::training::run_episodes;
//!
//! let mut env = Environment::new(EnvConfig::default());
//! let stats = run_episodes(&mut env, &mut UniformRandom, 10, 7).unwrap();
//! assert_eq!(stats.episodes, 10);
//! ```

pub mod episode;

pub use episode::{run_episode, run_episodes, Episode, EpisodeStats, Transition};
