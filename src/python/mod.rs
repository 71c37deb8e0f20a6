//! Python bindings for the numeric tic-tac-toe environment.
//!
//! # Quick Start
//!
//! ```python
//! import numeric_ttt
//!
//! env = numeric_ttt.NumericTicTacToe(seed=42)
//! state = env.reset()
//!
//! terminal = False
//! while not terminal:
//!     action = env.agent_actions()[0]
//!     state, reward, terminal, label = env.step(action.position, action.value)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_env;

pub use py_core::*;
pub use py_env::*;

/// numeric_ttt: numeric tic-tac-toe as a step-based RL environment.
#[pymodule]
fn numeric_ttt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAction>()?;
    m.add_class::<PyNumericTicTacToe>()?;

    Ok(())
}
