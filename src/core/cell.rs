//! Cells and sides.
//!
//! ## Cell
//!
//! A cell is either empty or holds a token value in 1..=9. Empty is an
//! explicit variant, never a numeric sentinel, so win detection can never
//! mistake a missing value for part of a sum.
//!
//! ## Side
//!
//! Values partition by parity: odd values belong to the agent, even values
//! to the environment opponent.

use serde::{Deserialize, Serialize};

/// Smallest token value.
pub const MIN_VALUE: u8 = 1;

/// Largest token value.
pub const MAX_VALUE: u8 = 9;

/// Contents of one board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Filled(u8),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The placed value, if any.
    #[must_use]
    pub const fn value(self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Filled(v) => Some(v),
        }
    }
}

impl From<Option<u8>> for Cell {
    fn from(value: Option<u8>) -> Self {
        value.map_or(Cell::Empty, Cell::Filled)
    }
}

/// The two movers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Places odd values {1, 3, 5, 7, 9}.
    Agent,
    /// Places even values {2, 4, 6, 8}.
    Opponent,
}

impl Side {
    /// Side owning `value`, or `None` if the value is outside 1..=9.
    ///
    /// ```
    /// use numeric_ttt::core::Side;
    ///
    /// assert_eq!(Side::of_value(3), Some(Side::Agent));
    /// assert_eq!(Side::of_value(4), Some(Side::Opponent));
    /// assert_eq!(Side::of_value(0), None);
    /// ```
    #[must_use]
    pub fn of_value(value: u8) -> Option<Side> {
        if !(MIN_VALUE..=MAX_VALUE).contains(&value) {
            return None;
        }
        if value % 2 == 1 {
            Some(Side::Agent)
        } else {
            Some(Side::Opponent)
        }
    }

    /// Whether `value` is in this side's pool (ignoring what has been used).
    #[must_use]
    pub fn owns(self, value: u8) -> bool {
        Side::of_value(value) == Some(self)
    }

    /// The full pool of values for this side, in ascending order.
    pub fn pool(self) -> impl Iterator<Item = u8> {
        (MIN_VALUE..=MAX_VALUE).filter(move |&v| self.owns(v))
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Agent => f.write_str("Agent"),
            Side::Opponent => f.write_str("Environment"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value() {
        assert_eq!(Cell::Empty.value(), None);
        assert_eq!(Cell::Filled(7).value(), Some(7));
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Filled(1).is_empty());
        assert_eq!(Cell::default(), Cell::Empty);
    }

    #[test]
    fn test_cell_from_option() {
        assert_eq!(Cell::from(None), Cell::Empty);
        assert_eq!(Cell::from(Some(4)), Cell::Filled(4));
    }

    #[test]
    fn test_pools() {
        let agent: Vec<_> = Side::Agent.pool().collect();
        let opponent: Vec<_> = Side::Opponent.pool().collect();

        assert_eq!(agent, vec![1, 3, 5, 7, 9]);
        assert_eq!(opponent, vec![2, 4, 6, 8]);
    }
}
