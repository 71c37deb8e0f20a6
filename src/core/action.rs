//! Action representation: a (position, value) placement.
//!
//! Actions are mover-agnostic. The parity of the value already says who
//! placed it, so the same type and the same `apply_action` serve both sides.

use serde::{Deserialize, Serialize};

use super::cell::Side;

/// Place `value` on the cell at `position`.
///
/// ## Example
///
/// ```
/// use numeric_ttt::core::{Action, Side};
///
/// let action = Action::new(7, 9);
/// assert_eq!(action.position, 7);
/// assert_eq!(action.side(), Some(Side::Agent));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// Cell index, 0..=8.
    pub position: usize,

    /// Token value, 1..=9.
    pub value: u8,
}

impl Action {
    /// Create an action.
    #[must_use]
    pub const fn new(position: usize, value: u8) -> Self {
        Self { position, value }
    }

    /// The side whose pool holds this value, `None` if out of range.
    #[must_use]
    pub fn side(self) -> Option<Side> {
        Side::of_value(self.value)
    }
}

impl From<(usize, u8)> for Action {
    fn from((position, value): (usize, u8)) -> Self {
        Self::new(position, value)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.position, self.value)
    }
}
