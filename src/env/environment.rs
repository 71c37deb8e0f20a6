//! The step-based environment.
//!
//! `Environment` owns exactly one live board. Each `step` applies one agent
//! action and, unless that ended the game, one opponent action chosen by
//! the injected `Policy`.
//!
//! ## Rewards
//!
//! | Outcome | Reward | Terminal |
//! |---|---|---|
//! | Agent Win | +10 | yes |
//! | Environment Win | -10 | yes |
//! | Tie | 0 | yes |
//! | Resume | -1 | no |

use serde::{Deserialize, Serialize};

use crate::core::{
    Action, Board, EngineError, EnvConfig, GameRng, GameRngState, InvalidActionReason, Result, Side,
};
use crate::rules::{actions_for, apply_action, terminal_status, TerminalStatus};

use super::policy::{Policy, UniformRandom};

/// Result of a single `step`, from the agent's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepOutcome {
    AgentWin,
    EnvironmentWin,
    Tie,
    Resume,
}

impl StepOutcome {
    /// Reward paid to the agent.
    #[must_use]
    pub const fn reward(self) -> i32 {
        match self {
            StepOutcome::AgentWin => 10,
            StepOutcome::EnvironmentWin => -10,
            StepOutcome::Tie => 0,
            StepOutcome::Resume => -1,
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, StepOutcome::Resume)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            StepOutcome::AgentWin => "Agent Win",
            StepOutcome::EnvironmentWin => "Environment Win",
            StepOutcome::Tie => "Tie",
            StepOutcome::Resume => "Resume",
        }
    }

    /// Outcome after `mover` produced a board with `status`.
    fn after_move(mover: Side, status: TerminalStatus) -> Self {
        match (status, mover) {
            (TerminalStatus::Win, Side::Agent) => StepOutcome::AgentWin,
            (TerminalStatus::Win, Side::Opponent) => StepOutcome::EnvironmentWin,
            (TerminalStatus::Tie, _) => StepOutcome::Tie,
            (TerminalStatus::Resume, _) => StepOutcome::Resume,
        }
    }
}

impl std::fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything a caller learns from one `step`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Board after the agent move and, if played, the opponent move.
    pub state: Board,
    pub reward: i32,
    pub terminal: bool,
    pub outcome: StepOutcome,
    /// The injected opponent move. `None` when the agent's move ended the game.
    pub opponent_action: Option<Action>,
}

impl StepResult {
    fn new(state: Board, outcome: StepOutcome, opponent_action: Option<Action>) -> Self {
        Self {
            state,
            reward: outcome.reward(),
            terminal: outcome.is_terminal(),
            outcome,
            opponent_action,
        }
    }
}

/// Numeric tic-tac-toe environment.
///
/// ## Example
///
/// ```
/// use numeric_ttt::core::{Action, EnvConfig};
/// use numeric_ttt::env::Environment;
///
/// let mut env = Environment::new(EnvConfig::default());
/// let result = env.step(Action::new(0, 1)).unwrap();
///
/// assert_eq!(result.state.values()[0], Some(1));
/// assert_eq!(result.reward, -1);
/// assert!(!result.terminal);
/// ```
#[derive(Clone, Debug)]
pub struct Environment<P: Policy = UniformRandom> {
    board: Board,
    opponent: P,
    rng: GameRng,
    config: EnvConfig,
}

impl Environment<UniformRandom> {
    /// Create an environment with a uniform random opponent.
    pub fn new(config: EnvConfig) -> Self {
        Self::with_policy(config, UniformRandom)
    }
}

impl<P: Policy> Environment<P> {
    /// Create an environment with a custom opponent policy.
    pub fn with_policy(config: EnvConfig, opponent: P) -> Self {
        Self {
            board: Board::new(),
            opponent,
            rng: GameRng::new(config.seed),
            config,
        }
    }

    /// Start a new game on an empty board.
    pub fn reset(&mut self) -> Board {
        self.board = Board::new();
        self.board
    }

    /// The live board.
    #[must_use]
    pub fn state(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    #[must_use]
    pub fn opponent(&self) -> &P {
        &self.opponent
    }

    pub fn opponent_mut(&mut self) -> &mut P {
        &mut self.opponent
    }

    /// Whether the live game has ended.
    #[must_use]
    pub fn is_done(&self) -> bool {
        terminal_status(&self.board).is_terminal()
    }

    /// Legal agent actions on the live board.
    #[must_use]
    pub fn agent_actions(&self) -> Vec<Action> {
        actions_for(&self.board, Side::Agent).collect()
    }

    /// Capture the opponent RNG position.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Restore a captured RNG position.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Advance the live board by one agent move and one opponent move.
    ///
    /// On error the live board is left as it was.
    pub fn step(&mut self, action: Action) -> Result<StepResult> {
        let board = self.board;
        let result = self.transition(&board, action)?;
        self.board = result.state;
        Ok(result)
    }

    /// Run the step protocol from an arbitrary board.
    ///
    /// The live board is not touched; the opponent policy and RNG are. A
    /// reply the rules reject fails with `EngineError::IllegalPolicyAction`.
    pub fn transition(&mut self, board: &Board, action: Action) -> Result<StepResult> {
        if terminal_status(board).is_terminal() {
            return Err(EngineError::GameOver);
        }

        let after_agent = apply_action(board, action)?;
        if action.side() != Some(Side::Agent) {
            return Err(EngineError::invalid(action, InvalidActionReason::WrongSide));
        }

        let status = terminal_status(&after_agent);
        if status.is_terminal() {
            let outcome = StepOutcome::after_move(Side::Agent, status);
            log::debug!("agent {} ended the game: {}", action, outcome);
            return Ok(StepResult::new(after_agent, outcome, None));
        }

        let candidates: Vec<Action> = actions_for(&after_agent, Side::Opponent).collect();
        if candidates.is_empty() {
            return Err(EngineError::EmptyActionSpace);
        }
        let reply = self
            .opponent
            .choose_action(&candidates, &mut self.rng)
            .ok_or(EngineError::PolicyDeclined(candidates.len()))?;
        log::trace!("opponent chose {reply} from {} actions", candidates.len());

        let after_opponent = match apply_action(&after_agent, reply) {
            Ok(board) => board,
            Err(err) => return Err(err.into_policy_error()),
        };
        if reply.side() != Some(Side::Opponent) {
            return Err(EngineError::IllegalPolicyAction {
                action: reply,
                reason: InvalidActionReason::WrongSide,
            });
        }

        let outcome = StepOutcome::after_move(Side::Opponent, terminal_status(&after_opponent));
        log::debug!("agent {} / opponent {}: {}", action, reply, outcome);
        Ok(StepResult::new(after_opponent, outcome, Some(reply)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::policy::{FirstLegal, Scripted};

    /// Board from raw values, 0 for an empty cell.
    fn board(raw: [u8; 9]) -> Board {
        Board::from_values(raw.map(|v| (v != 0).then_some(v))).unwrap()
    }

    fn scripted(actions: &[(usize, u8)]) -> Environment<Scripted> {
        let opponent = Scripted::new(actions.iter().map(|&a| Action::from(a)));
        Environment::with_policy(EnvConfig::default(), opponent)
    }

    #[test]
    fn test_outcome_table() {
        assert_eq!(StepOutcome::AgentWin.reward(), 10);
        assert_eq!(StepOutcome::EnvironmentWin.reward(), -10);
        assert_eq!(StepOutcome::Tie.reward(), 0);
        assert_eq!(StepOutcome::Resume.reward(), -1);

        assert_eq!(StepOutcome::AgentWin.to_string(), "Agent Win");
        assert_eq!(StepOutcome::EnvironmentWin.to_string(), "Environment Win");
        assert_eq!(StepOutcome::Tie.to_string(), "Tie");
        assert_eq!(StepOutcome::Resume.to_string(), "Resume");

        assert!(!StepOutcome::Resume.is_terminal());
        assert!(StepOutcome::Tie.is_terminal());
    }

    #[test]
    fn test_first_step_resumes() {
        let mut env = scripted(&[(4, 2)]);
        let result = env.step(Action::new(0, 1)).unwrap();

        assert_eq!(result.state, board([1, 0, 0, 0, 2, 0, 0, 0, 0]));
        assert_eq!(result.reward, -1);
        assert!(!result.terminal);
        assert_eq!(result.outcome, StepOutcome::Resume);
        assert_eq!(result.opponent_action, Some(Action::new(4, 2)));
        assert_eq!(env.state(), &result.state);
    }

    #[test]
    fn test_agent_win_skips_opponent() {
        let mut env = scripted(&[(1, 2)]);
        let start = board([1, 0, 0, 0, 5, 0, 0, 0, 0]);

        let result = env.transition(&start, Action::new(8, 9)).unwrap();

        assert_eq!(result.reward, 10);
        assert!(result.terminal);
        assert_eq!(result.outcome, StepOutcome::AgentWin);
        assert_eq!(result.opponent_action, None);
        assert_eq!(result.state.filled_count(), 3);
        assert_eq!(env.opponent().remaining(), 1);
    }

    #[test]
    fn test_environment_win() {
        // Opponent completes column 2: 6 + 1 + 8
        let start = board([3, 0, 6, 2, 0, 0, 0, 0, 0]);
        let mut env = scripted(&[(8, 8)]);

        let result = env.transition(&start, Action::new(5, 1)).unwrap();

        assert_eq!(result.outcome, StepOutcome::EnvironmentWin);
        assert_eq!(result.reward, -10);
        assert!(result.terminal);
    }

    #[test]
    fn test_tie_after_agent_move_never_asks_opponent() {
        // Only cell 7 is empty
        let start = board([1, 2, 3, 4, 5, 7, 6, 0, 8]);
        let mut env = scripted(&[]);

        let result = env.transition(&start, Action::new(7, 9)).unwrap();

        assert_eq!(result.outcome, StepOutcome::Tie);
        assert_eq!(result.reward, 0);
        assert!(result.terminal);
        assert_eq!(result.opponent_action, None);
    }

    #[test]
    fn test_tie_after_opponent_move() {
        let start = board([1, 2, 3, 4, 5, 7, 6, 0, 0]);
        let mut env = scripted(&[(8, 8)]);

        let result = env.transition(&start, Action::new(7, 9)).unwrap();

        assert_eq!(result.outcome, StepOutcome::Tie);
        assert_eq!(result.reward, 0);
        assert!(result.terminal);
        assert!(result.state.is_full());
        assert_eq!(result.opponent_action, Some(Action::new(8, 8)));
    }

    #[test]
    fn test_rejects_wrong_side() {
        let mut env = Environment::new(EnvConfig::default());
        let err = env.step(Action::new(0, 2)).unwrap_err();

        let reason = InvalidActionReason::WrongSide;
        assert_eq!(err, EngineError::invalid(Action::new(0, 2), reason));
        assert!(err.is_caller_error());
        assert_eq!(env.state(), &Board::new());
    }

    #[test]
    fn test_rejects_reused_value() {
        let start = board([1, 5, 0, 0, 9, 0, 0, 0, 0]);
        let mut env = Environment::new(EnvConfig::default());

        let err = env.transition(&start, Action::new(2, 9)).unwrap_err();
        let reason = InvalidActionReason::ValueAlreadyUsed;
        assert_eq!(err, EngineError::invalid(Action::new(2, 9), reason));
    }

    #[test]
    fn test_rejects_step_after_game_over() {
        let mut env = Environment::with_policy(EnvConfig::default(), FirstLegal);
        let won = board([1, 0, 0, 0, 5, 0, 0, 0, 9]);

        let result = env.transition(&won, Action::new(1, 3));
        assert_eq!(result, Err(EngineError::GameOver));
    }

    #[test]
    fn test_policy_declined() {
        let mut env = scripted(&[]);
        let err = env.step(Action::new(0, 1)).unwrap_err();

        assert_eq!(err, EngineError::PolicyDeclined(8 * 4));
        assert_eq!(env.state(), &Board::new());
    }

    #[test]
    fn test_illegal_opponent_choice_rejected() {
        // Scripted opponent tries the cell the agent just took
        let mut env = scripted(&[(0, 2)]);
        let err = env.step(Action::new(0, 1)).unwrap_err();

        assert_eq!(
            err,
            EngineError::IllegalPolicyAction {
                action: Action::new(0, 2),
                reason: InvalidActionReason::Occupied,
            }
        );
        assert!(!err.is_caller_error());
        assert_eq!(env.state(), &Board::new());
    }

    #[test]
    fn test_opponent_playing_agent_value_rejected() {
        let mut env = scripted(&[(4, 3)]);
        let err = env.step(Action::new(0, 1)).unwrap_err();

        assert_eq!(
            err,
            EngineError::IllegalPolicyAction {
                action: Action::new(4, 3),
                reason: InvalidActionReason::WrongSide,
            }
        );
        assert_eq!(env.state(), &Board::new());
    }

    #[test]
    fn test_empty_opponent_space_is_error() {
        // Every even value used, empty cells remain, no win
        let start = board([2, 4, 6, 8, 0, 0, 0, 0, 0]);
        let mut env = Environment::new(EnvConfig::default());

        let result = env.transition(&start, Action::new(4, 1));
        assert_eq!(result, Err(EngineError::EmptyActionSpace));
    }

    #[test]
    fn test_reset() {
        let mut env = Environment::new(EnvConfig::default());
        env.step(Action::new(0, 1)).unwrap();
        assert_eq!(env.state().filled_count(), 2);

        let board = env.reset();
        assert_eq!(board, Board::new());
        assert_eq!(env.state(), &Board::new());
        assert!(!env.is_done());
    }

    #[test]
    fn test_opponent_reconfigured_between_games() {
        let mut env = scripted(&[(4, 2)]);
        env.step(Action::new(0, 1)).unwrap();
        assert_eq!(env.opponent().remaining(), 0);

        env.reset();
        *env.opponent_mut() = Scripted::new([Action::new(8, 2)]);
        let result = env.step(Action::new(0, 1)).unwrap();

        assert_eq!(result.opponent_action, Some(Action::new(8, 2)));
        assert_eq!(result.state, board([1, 0, 0, 0, 0, 0, 0, 0, 2]));
        assert_eq!(env.opponent().remaining(), 0);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut env1 = Environment::new(EnvConfig::new().with_seed(11));
        let mut env2 = Environment::new(EnvConfig::new().with_seed(11));

        let r1 = env1.step(Action::new(4, 5)).unwrap();
        let r2 = env2.step(Action::new(4, 5)).unwrap();

        assert_eq!(r1, r2);
    }

    #[test]
    fn test_rng_restore_replays_opponent() {
        let mut env = Environment::new(EnvConfig::default());
        let saved = env.rng_state();
        let first = env.step(Action::new(4, 5)).unwrap();

        env.reset();
        env.restore_rng(&saved);
        let replay = env.step(Action::new(4, 5)).unwrap();

        assert_eq!(first, replay);
    }
}
