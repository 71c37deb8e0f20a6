//! Rules of numeric tic-tac-toe.
//!
//! All functions here are pure: they read a `&Board` and, for
//! `apply_action`, return a new board. The step protocol that sequences
//! agent and opponent moves lives in `env`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    Action, Board, Cell, EngineError, InvalidActionReason, Result, Side, BOARD_SIZE, MAX_VALUE,
    MIN_VALUE,
};

/// Sum a completed line must reach to win.
pub const WINNING_SUM: u8 = 15;

/// The eight winning lines: rows, columns, diagonals.
pub static LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Empty cell indices, at most nine.
pub type Positions = SmallVec<[usize; BOARD_SIZE]>;

/// Unused values of one side, at most five.
pub type Values = SmallVec<[u8; 5]>;

/// Terminal classification of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalStatus {
    /// Some line is complete and sums to 15.
    Win,
    /// No empty cells and no winning line.
    Tie,
    /// Play continues.
    Resume,
}

impl TerminalStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, TerminalStatus::Resume)
    }
}

impl std::fmt::Display for TerminalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminalStatus::Win => f.write_str("Win"),
            TerminalStatus::Tie => f.write_str("Tie"),
            TerminalStatus::Resume => f.write_str("Resume"),
        }
    }
}

/// Indices of empty cells in ascending order.
#[must_use]
pub fn legal_positions(board: &Board) -> Positions {
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(i, _)| i)
        .collect()
}

/// Unused values split by side: `(agent_values, opponent_values)`.
///
/// The two sets are disjoint and together hold every value not yet on the
/// board.
#[must_use]
pub fn legal_values(board: &Board) -> (Values, Values) {
    let agent = side_values(board, Side::Agent);
    let opponent = side_values(board, Side::Opponent);
    (agent, opponent)
}

/// Unused values for one side.
#[must_use]
pub fn side_values(board: &Board, side: Side) -> Values {
    side.pool().filter(|&v| !board.contains_value(v)).collect()
}

/// Every legal placement for `side`, position-major.
///
/// Computed from the board on each call; nothing is cached.
pub fn actions_for(board: &Board, side: Side) -> impl Iterator<Item = Action> {
    let values = side_values(board, side);
    legal_positions(board)
        .into_iter()
        .flat_map(move |position| placements(position, values.clone()))
}

fn placements(position: usize, values: Values) -> impl Iterator<Item = Action> {
    values
        .into_iter()
        .map(move |value| Action::new(position, value))
}

/// Lazily enumerated `(agent_actions, opponent_actions)`.
pub fn action_space(board: &Board) -> (impl Iterator<Item = Action>, impl Iterator<Item = Action>) {
    let agent = actions_for(board, Side::Agent);
    let opponent = actions_for(board, Side::Opponent);
    (agent, opponent)
}

/// Sum of a line, `None` if any of its cells is empty.
#[must_use]
pub fn line_sum(board: &Board, line: &[usize; 3]) -> Option<u8> {
    line.iter().map(|&i| board.cells()[i].value()).sum()
}

/// Lines that are complete and sum to 15.
pub fn winning_lines(board: &Board) -> impl Iterator<Item = &'static [usize; 3]> + '_ {
    LINES
        .iter()
        .filter(move |line| line_sum(board, line) == Some(WINNING_SUM))
}

/// Whether any line is complete and sums to exactly 15.
#[must_use]
pub fn is_winning(board: &Board) -> bool {
    winning_lines(board).next().is_some()
}

/// Classify a board. Win takes precedence over Tie.
#[must_use]
pub fn terminal_status(board: &Board) -> TerminalStatus {
    if is_winning(board) {
        TerminalStatus::Win
    } else if board.is_full() {
        TerminalStatus::Tie
    } else {
        TerminalStatus::Resume
    }
}

/// `(is_terminal, status)` for a board.
#[must_use]
pub fn is_terminal(board: &Board) -> (bool, TerminalStatus) {
    let status = terminal_status(board);
    (status.is_terminal(), status)
}

/// Check that `action` can be placed on `board`.
///
/// Does not check which side is moving.
pub fn validate_action(board: &Board, action: Action) -> Result<()> {
    let reject = |reason| Err(EngineError::invalid(action, reason));

    let Some(cell) = board.get(action.position) else {
        return reject(InvalidActionReason::PositionOutOfRange);
    };
    if !(MIN_VALUE..=MAX_VALUE).contains(&action.value) {
        return reject(InvalidActionReason::ValueOutOfRange);
    }
    if cell != Cell::Empty {
        return reject(InvalidActionReason::Occupied);
    }
    if board.contains_value(action.value) {
        return reject(InvalidActionReason::ValueAlreadyUsed);
    }
    Ok(())
}

/// Place a value, returning the new board. The input board is untouched.
///
/// Rejects the action before producing any new state if the position or
/// value is out of range, the cell is occupied, or the value is in use.
///
/// ```
/// use numeric_ttt::core::{Action, Board};
/// use numeric_ttt::rules::apply_action;
///
/// let board = Board::new();
/// let next = apply_action(&board, Action::new(7, 9)).unwrap();
///
/// assert_eq!(next.values()[7], Some(9));
/// assert_eq!(board.values()[7], None);
/// ```
pub fn apply_action(board: &Board, action: Action) -> Result<Board> {
    validate_action(board, action)?;
    let mut next = *board;
    next.set(action.position, action.value);
    Ok(next)
}
