//! Environment bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, EnvConfig, Side, BOARD_SIZE};
use crate::encoding::{encode_board, legal_action_mask, CHANNELS};
use crate::env::Environment;
use crate::rules::{actions_for, is_terminal, is_winning, legal_positions, legal_values};

use super::py_core::{to_py_err, PyAction};

/// `(state, reward, terminal, label)` returned by `step`.
type StepTuple = (Vec<Option<u8>>, i32, bool, String);

/// Python wrapper for the numeric tic-tac-toe environment.
///
/// The opponent plays uniformly at random, seeded by `seed`.
#[pyclass(name = "NumericTicTacToe")]
pub struct PyNumericTicTacToe {
    env: Environment,
}

#[pymethods]
impl PyNumericTicTacToe {
    #[new]
    #[pyo3(signature = (seed = 42))]
    fn new(seed: u64) -> Self {
        Self {
            env: Environment::new(EnvConfig::new().with_seed(seed)),
        }
    }

    /// Start a new game; returns the empty board.
    fn reset(&mut self) -> Vec<Option<u8>> {
        self.env.reset().values().to_vec()
    }

    /// Play one agent move and the opponent's reply.
    ///
    /// Returns `(state, reward, terminal, label)`.
    fn step(&mut self, position: usize, value: u8) -> PyResult<StepTuple> {
        let action = Action::new(position, value);
        let result = self.env.step(action).map_err(to_py_err)?;
        Ok((
            result.state.values().to_vec(),
            result.reward,
            result.terminal,
            result.outcome.label().to_string(),
        ))
    }

    /// Current board, `None` for empty cells.
    #[getter]
    fn state(&self) -> Vec<Option<u8>> {
        self.env.state().values().to_vec()
    }

    fn legal_positions(&self) -> Vec<usize> {
        legal_positions(self.env.state()).to_vec()
    }

    /// `(agent_values, opponent_values)`.
    fn legal_values(&self) -> (Vec<u8>, Vec<u8>) {
        let (agent, opponent) = legal_values(self.env.state());
        (agent.to_vec(), opponent.to_vec())
    }

    fn agent_actions(&self) -> Vec<PyAction> {
        let board = self.env.state();
        actions_for(board, Side::Agent).map(PyAction).collect()
    }

    fn opponent_actions(&self) -> Vec<PyAction> {
        let board = self.env.state();
        actions_for(board, Side::Opponent).map(PyAction).collect()
    }

    fn is_winning(&self) -> bool {
        is_winning(self.env.state())
    }

    /// `(terminal, status)` where status is "Win", "Tie" or "Resume".
    fn is_terminal(&self) -> (bool, String) {
        let (terminal, status) = is_terminal(self.env.state());
        (terminal, status.to_string())
    }

    /// One-hot board, shape `(9, 10)`.
    fn observation<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<f32>>> {
        let encoded = encode_board(self.env.state());
        PyArray1::from_vec_bound(py, encoded.tensor)
            .reshape([BOARD_SIZE, CHANNELS])
            .map_err(|e| PyValueError::new_err(e.to_string()))
    }

    /// Legal agent actions as a length-81 mask.
    fn action_mask(&self) -> Vec<bool> {
        legal_action_mask(self.env.state(), Side::Agent)
    }

    fn __repr__(&self) -> String {
        let filled = self.env.state().filled_count();
        let (_, status) = is_terminal(self.env.state());
        format!("NumericTicTacToe(filled={filled}, status={status})")
    }
}
