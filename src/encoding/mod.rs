//! Tensor and action-index encodings for RL callers.
//!
//! - `encode_board`: one-hot observation, shape `[9, 10]`
//! - `action_index` / `action_from_index`: flat discrete action ids in `0..81`
//! - `legal_action_mask`: which ids are legal for a side

pub mod encoder;

pub use encoder::{
    action_from_index, action_index, encode_board, legal_action_mask, EncodedBoard,
    ACTION_SPACE_SIZE, CHANNELS,
};
