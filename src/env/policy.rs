//! Move-selection policies.
//!
//! The environment opponent's move is chosen by a `Policy` injected into
//! `Environment`. The same trait drives the agent side in `training`.
//!
//! - `UniformRandom`: uniform over legal actions (default opponent)
//! - `FirstLegal`: first action in enumeration order
//! - `Scripted`: replays a fixed sequence, for deterministic tests

use std::collections::VecDeque;

use crate::core::{Action, GameRng};

/// Chooses one action from a set of legal actions.
pub trait Policy: Send {
    /// Choose an action from `actions`.
    ///
    /// Returns `None` if the policy declines or `actions` is empty.
    fn choose_action(&mut self, actions: &[Action], rng: &mut GameRng) -> Option<Action>;
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn choose_action(&mut self, actions: &[Action], rng: &mut GameRng) -> Option<Action> {
        (**self).choose_action(actions, rng)
    }
}

/// Uniform random policy.
#[derive(Clone, Debug, Default)]
pub struct UniformRandom;

impl Policy for UniformRandom {
    fn choose_action(&mut self, actions: &[Action], rng: &mut GameRng) -> Option<Action> {
        if actions.is_empty() {
            return None;
        }
        let idx = rng.gen_range_usize(0..actions.len());
        Some(actions[idx])
    }
}

/// Always picks the first legal action.
#[derive(Clone, Debug, Default)]
pub struct FirstLegal;

impl Policy for FirstLegal {
    fn choose_action(&mut self, actions: &[Action], _rng: &mut GameRng) -> Option<Action> {
        actions.first().copied()
    }
}

/// Replays a fixed queue of actions, one per call.
///
/// The scripted action is returned whether or not it is in `actions`;
/// the environment rejects illegal ones. Returns `None` once exhausted.
#[derive(Clone, Debug, Default)]
pub struct Scripted {
    queue: VecDeque<Action>,
}

impl Scripted {
    pub fn new(actions: impl IntoIterator<Item = Action>) -> Self {
        Self {
            queue: actions.into_iter().collect(),
        }
    }

    /// Actions not yet played.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Policy for Scripted {
    fn choose_action(&mut self, _actions: &[Action], _rng: &mut GameRng) -> Option<Action> {
        self.queue.pop_front()
    }
}
