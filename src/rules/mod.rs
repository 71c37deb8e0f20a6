//! Game rules.
//!
//! - Legal positions, values and the joint action space
//! - Win and terminal detection
//! - Single placements (`apply_action`)
//!
//! Rules never decide who moves next; `env` sequences the turns.

pub mod engine;

pub use engine::{
    action_space, actions_for, apply_action, legal_positions, legal_values, side_values,
    validate_action, Positions, Values,
};
pub use engine::{
    is_terminal, is_winning, line_sum, terminal_status, winning_lines, TerminalStatus, LINES,
    WINNING_SUM,
};
