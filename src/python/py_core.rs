//! Core type bindings for Python.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::{Action, EngineError};

/// Map engine errors to Python exceptions.
///
/// Caller mistakes become `ValueError`. Anything else, including an illegal
/// move from the opponent policy, becomes `RuntimeError`.
pub fn to_py_err(err: EngineError) -> PyErr {
    if err.is_caller_error() {
        PyValueError::new_err(err.to_string())
    } else {
        PyRuntimeError::new_err(err.to_string())
    }
}

/// Python wrapper for Action.
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    #[new]
    fn new(position: usize, value: u8) -> Self {
        Self(Action::new(position, value))
    }

    #[getter]
    fn position(&self) -> usize {
        self.0.position
    }

    #[getter]
    fn value(&self) -> u8 {
        self.0.value
    }

    fn __repr__(&self) -> String {
        let Action { position, value } = self.0;
        format!("Action(position={position}, value={value})")
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        ((self.0.position as u64) << 8) | u64::from(self.0.value)
    }
}
