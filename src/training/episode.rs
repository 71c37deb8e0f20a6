//! Episode runner and statistics.
//!
//! Drives an `Environment` with an agent `Policy` from an empty board to a
//! terminal outcome, recording every transition.

use serde::{Deserialize, Serialize};

use crate::core::{Action, Board, EngineError, GameRng, Result};
use crate::env::{Environment, Policy, StepOutcome, StepResult};

/// One agent decision and what the environment answered.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// Board the agent acted on.
    pub state: Board,
    /// Agent action.
    pub action: Action,
    /// Environment response.
    pub result: StepResult,
}

/// A complete game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Episode {
    pub transitions: Vec<Transition>,
    pub outcome: StepOutcome,
    pub total_reward: i32,
}

impl Episode {
    /// Number of agent moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Final board.
    #[must_use]
    pub fn final_state(&self) -> Option<&Board> {
        self.transitions.last().map(|t| &t.result.state)
    }
}

/// Aggregate results over many episodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeStats {
    pub episodes: usize,
    pub agent_wins: usize,
    pub environment_wins: usize,
    pub ties: usize,
    pub total_reward: i64,
}

impl EpisodeStats {
    /// Fold one episode into the totals.
    pub fn record(&mut self, episode: &Episode) {
        self.episodes += 1;
        self.total_reward += i64::from(episode.total_reward);
        match episode.outcome {
            StepOutcome::AgentWin => self.agent_wins += 1,
            StepOutcome::EnvironmentWin => self.environment_wins += 1,
            StepOutcome::Tie => self.ties += 1,
            StepOutcome::Resume => {}
        }
    }

    #[must_use]
    pub fn mean_reward(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.total_reward as f64 / self.episodes as f64
    }

    /// Fraction of episodes the agent won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.episodes == 0 {
            return 0.0;
        }
        self.agent_wins as f64 / self.episodes as f64
    }
}

impl std::fmt::Display for EpisodeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mean = self.mean_reward();
        write!(f, "{} episodes: ", self.episodes)?;
        write!(f, "{} agent wins, ", self.agent_wins)?;
        write!(f, "{} environment wins, ", self.environment_wins)?;
        write!(f, "{} ties, mean reward {mean:.3}", self.ties)
    }
}

/// Play one game from an empty board.
///
/// The agent policy chooses from the legal agent actions with `rng`; the
/// opponent uses the environment's own policy and RNG.
pub fn run_episode<P: Policy, A: Policy>(
    env: &mut Environment<P>,
    agent: &mut A,
    rng: &mut GameRng,
) -> Result<Episode> {
    let mut state = env.reset();
    let mut transitions = Vec::new();
    let mut total_reward = 0;

    loop {
        let actions = env.agent_actions();
        let action = agent
            .choose_action(&actions, rng)
            .ok_or(EngineError::PolicyDeclined(actions.len()))?;
        let result = env.step(action)?;

        total_reward += result.reward;
        let outcome = result.outcome;
        let next = result.state;
        transitions.push(Transition {
            state,
            action,
            result,
        });

        if outcome.is_terminal() {
            return Ok(Episode {
                transitions,
                outcome,
                total_reward,
            });
        }
        state = next;
    }
}

/// Play `count` games, forking a fresh agent RNG from `seed` for each.
pub fn run_episodes<P: Policy, A: Policy>(
    env: &mut Environment<P>,
    agent: &mut A,
    count: usize,
    seed: u64,
) -> Result<EpisodeStats> {
    let mut root = GameRng::new(seed);
    let mut stats = EpisodeStats::default();

    for _ in 0..count {
        let mut rng = root.fork();
        let episode = run_episode(env, agent, &mut rng)?;
        stats.record(&episode);
    }

    log::info!("{stats}");
    Ok(stats)
}
