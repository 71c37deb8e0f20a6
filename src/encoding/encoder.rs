//! Board and action encodings.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, Side, BOARD_SIZE, MAX_VALUE, MIN_VALUE};
use crate::rules::actions_for;

/// Channels per cell: empty plus one per value.
pub const CHANNELS: usize = MAX_VALUE as usize + 1;

/// Number of distinct (position, value) pairs.
pub const ACTION_SPACE_SIZE: usize = BOARD_SIZE * MAX_VALUE as usize;

/// Encoded board as a flat row-major tensor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedBoard {
    pub tensor: Vec<f32>,
    pub shape: Vec<usize>,
}

impl EncodedBoard {
    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }
}

/// One-hot encode a board: for each cell, channel 0 is set when empty and
/// channel `v` when it holds value `v`.
#[must_use]
pub fn encode_board(board: &Board) -> EncodedBoard {
    let mut tensor = vec![0.0f32; BOARD_SIZE * CHANNELS];
    for (i, cell) in board.cells().iter().enumerate() {
        let channel = cell.value().map_or(0, usize::from);
        tensor[i * CHANNELS + channel] = 1.0;
    }
    EncodedBoard {
        tensor,
        shape: vec![BOARD_SIZE, CHANNELS],
    }
}

/// Flat id for an action, `None` if it is out of range.
///
/// ```
/// use numeric_ttt::core::Action;
/// use numeric_ttt::encoding::{action_from_index, action_index};
///
/// assert_eq!(action_index(Action::new(0, 1)), Some(0));
/// assert_eq!(action_index(Action::new(8, 9)), Some(80));
/// assert_eq!(action_from_index(13), Some(Action::new(1, 5)));
/// ```
#[must_use]
pub fn action_index(action: Action) -> Option<usize> {
    if action.position >= BOARD_SIZE || !(MIN_VALUE..=MAX_VALUE).contains(&action.value) {
        return None;
    }
    let offset = usize::from(action.value - MIN_VALUE);
    Some(action.position * MAX_VALUE as usize + offset)
}

/// Inverse of `action_index`.
#[must_use]
pub fn action_from_index(index: usize) -> Option<Action> {
    if index >= ACTION_SPACE_SIZE {
        return None;
    }
    let position = index / MAX_VALUE as usize;
    // index % 9 < 9, fits in u8
    let value = (index % MAX_VALUE as usize) as u8 + MIN_VALUE;
    Some(Action::new(position, value))
}

/// Mask over all action ids, `true` where the action is legal for `side`.
#[must_use]
pub fn legal_action_mask(board: &Board, side: Side) -> Vec<bool> {
    let mut mask = vec![false; ACTION_SPACE_SIZE];
    for index in actions_for(board, side).filter_map(action_index) {
        mask[index] = true;
    }
    mask
}
