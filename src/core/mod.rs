//! Core types: cells, board, actions, RNG, configuration, errors.
//!
//! Everything here is plain data. Game rules live in `rules`, the step
//! protocol in `env`.

pub mod action;
pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod rng;

pub use action::Action;
pub use board::{Board, BOARD_SIZE};
pub use cell::{Cell, Side, MAX_VALUE, MIN_VALUE};
pub use config::EnvConfig;
pub use error::{EngineError, InvalidActionReason, Result};
pub use rng::{GameRng, GameRngState};
