//! The 3×3 board.
//!
//! Cell indices map to geometry:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! `Board` is a plain `Copy` value. Rules functions take a `&Board` and
//! return a new one, so callers never observe aliasing mutation.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, MAX_VALUE, MIN_VALUE};
use super::error::{EngineError, Result};

/// Number of cells.
pub const BOARD_SIZE: usize = 9;

/// Board state: nine cells, each empty or holding a unique value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// An all-empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from raw values.
    ///
    /// Fails if a value is outside 1..=9 or appears more than once.
    ///
    /// ```
    /// use numeric_ttt::core::Board;
    ///
    /// let mut values = [None; 9];
    /// values[0] = Some(1);
    /// values[4] = Some(2);
    /// let board = Board::from_values(values).unwrap();
    /// assert_eq!(board.filled_count(), 2);
    ///
    /// values[8] = Some(1);
    /// assert!(Board::from_values(values).is_err());
    /// ```
    pub fn from_values(values: [Option<u8>; BOARD_SIZE]) -> Result<Self> {
        let mut seen = [false; MAX_VALUE as usize + 1];
        for value in values.iter().flatten() {
            if !(MIN_VALUE..=MAX_VALUE).contains(value) {
                let reason = format!("value {value} out of range");
                return Err(EngineError::InvalidBoard(reason));
            }
            if std::mem::replace(&mut seen[*value as usize], true) {
                let reason = format!("value {value} appears twice");
                return Err(EngineError::InvalidBoard(reason));
            }
        }
        Ok(Self {
            cells: values.map(Cell::from),
        })
    }

    /// Cell at `position`, `None` if out of range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// All cells in index order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Raw values in index order.
    #[must_use]
    pub fn values(&self) -> [Option<u8>; BOARD_SIZE] {
        self.cells.map(Cell::value)
    }

    /// Whether `value` has been placed anywhere.
    #[must_use]
    pub fn contains_value(&self, value: u8) -> bool {
        self.cells.iter().any(|c| c.value() == Some(value))
    }

    /// Values present on the board.
    pub fn used_values(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().filter_map(|c| c.value())
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled_count() == BOARD_SIZE
    }

    /// Write a value without any checks. Callers validate first.
    pub(crate) fn set(&mut self, position: usize, value: u8) {
        self.cells[position] = Cell::Filled(value);
    }
}
