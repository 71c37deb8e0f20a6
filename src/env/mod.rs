//! Step protocol and opponent policies.
//!
//! - `Environment`: one live board, `reset` and `step`
//! - `StepResult` / `StepOutcome`: reward, terminal flag and label
//! - `Policy`: pluggable move selection, with stock implementations

pub mod environment;
pub mod policy;

pub use environment::{Environment, StepOutcome, StepResult};
pub use policy::{FirstLegal, Policy, Scripted, UniformRandom};
