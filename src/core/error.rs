//! Engine error types.

use thiserror::Error;

use super::action::Action;

/// Why an action was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidActionReason {
    /// Position is not in 0..=8.
    PositionOutOfRange,
    /// Value is not in 1..=9.
    ValueOutOfRange,
    /// Target cell already holds a value.
    Occupied,
    /// Value is already on the board.
    ValueAlreadyUsed,
    /// Value belongs to the other side's pool.
    WrongSide,
}

impl std::fmt::Display for InvalidActionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            InvalidActionReason::PositionOutOfRange => "position out of range",
            InvalidActionReason::ValueOutOfRange => "value out of range",
            InvalidActionReason::Occupied => "position occupied",
            InvalidActionReason::ValueAlreadyUsed => "value already used",
            InvalidActionReason::WrongSide => "value belongs to the other side",
        };
        f.write_str(msg)
    }
}

/// Errors surfaced by the board engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid action {action}: {reason}")]
    InvalidAction {
        action: Action,
        reason: InvalidActionReason,
    },

    /// Reached the opponent move with nothing to play. Indicates a bug in
    /// terminal detection.
    #[error("opponent action space is empty")]
    EmptyActionSpace,

    #[error("policy declined to choose from {0} legal actions")]
    PolicyDeclined(usize),

    /// The opponent policy answered with a move the rules reject.
    #[error("policy chose illegal action {action}: {reason}")]
    IllegalPolicyAction {
        action: Action,
        reason: InvalidActionReason,
    },

    #[error("game is already over")]
    GameOver,

    #[error("invalid board: {0}")]
    InvalidBoard(String),
}

impl EngineError {
    pub(crate) fn invalid(action: Action, reason: InvalidActionReason) -> Self {
        EngineError::InvalidAction { action, reason }
    }

    /// The same rejection, blamed on the opponent policy instead of the
    /// caller.
    pub(crate) fn into_policy_error(self) -> Self {
        match self {
            EngineError::InvalidAction { action, reason } => {
                EngineError::IllegalPolicyAction { action, reason }
            }
            other => other,
        }
    }

    /// Whether this error was caused by the caller's input rather than an
    /// engine invariant or a misbehaving policy.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidAction { .. } | Self::GameOver | Self::InvalidBoard(_)
        )
    }
}

/// Convenience result type for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let reason = InvalidActionReason::ValueAlreadyUsed;
        let err = EngineError::invalid(Action::new(2, 9), reason);
        assert_eq!(err.to_string(), "invalid action (2, 9): value already used");
        assert_eq!(EngineError::GameOver.to_string(), "game is already over");
    }

    #[test]
    fn test_caller_error() {
        assert!(EngineError::GameOver.is_caller_error());
        assert!(!EngineError::EmptyActionSpace.is_caller_error());
        assert!(!EngineError::PolicyDeclined(3).is_caller_error());
    }

    #[test]
    fn test_policy_error_is_not_caller_error() {
        let action = Action::new(4, 2);
        let err = EngineError::invalid(action, InvalidActionReason::Occupied);
        assert!(err.is_caller_error());

        let err = err.into_policy_error();
        assert_eq!(
            err,
            EngineError::IllegalPolicyAction {
                action,
                reason: InvalidActionReason::Occupied,
            }
        );
        assert!(!err.is_caller_error());
        assert_eq!(
            err.to_string(),
            "policy chose illegal action (4, 2): position occupied"
        );

        let over = EngineError::GameOver.into_policy_error();
        assert_eq!(over, EngineError::GameOver);
    }
}
