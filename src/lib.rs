//! # numeric-ttt
//!
//! Numeric tic-tac-toe as a step-based reinforcement-learning environment.
//!
//! The agent places odd values {1, 3, 5, 7, 9}, the environment opponent
//! places even values {2, 4, 6, 8}, each value at most once. A row, column
//! or diagonal whose three filled cells sum to 15 wins.
//!
//! ## Design
//!
//! - **Explicit empties**: cells are `Cell::Empty | Cell::Filled(v)`. Win
//!   detection skips any line with an empty cell before summing.
//!
//! - **Pure rules**: `rules::apply_action` returns a new `Board` and rejects
//!   illegal placements before producing any state.
//!
//! - **Injected randomness**: the opponent is a `Policy` and the RNG is
//!   owned by the `Environment`, so games replay from a seed.
//!
//! ## Modules
//!
//! - `core`: cells, board, actions, RNG, configuration, errors
//! - `rules`: legality, action space, win/terminal detection
//! - `env`: the step protocol and opponent policies
//! - `training`: episode runner and statistics
//! - `encoding`: observation tensors and flat action ids

pub mod core;
pub mod encoding;
pub mod env;
pub mod rules;
pub mod training;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, Cell, EngineError, EnvConfig, GameRng, GameRngState, InvalidActionReason, Side,
};

pub use crate::rules::{
    action_space, apply_action, is_terminal, is_winning, legal_positions, legal_values,
    TerminalStatus,
};

pub use crate::env::{
    Environment, FirstLegal, Policy, Scripted, StepOutcome, StepResult, UniformRandom,
};

pub use crate::training::{run_episode, run_episodes, Episode, EpisodeStats, Transition};

pub use crate::encoding::{encode_board, EncodedBoard, ACTION_SPACE_SIZE};
