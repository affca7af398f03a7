use crate::core::models::dice::DieSetError;
use crate::core::models::solution::SolveStatus;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid die set: {0}")]
    DieSet(#[from] DieSetError),

    #[error("Enumeration exceeded its time budget of {budget:?}; partial results were discarded")]
    TimedOut { budget: Duration },

    #[error("Solver finished with status '{status}'")]
    Solver { status: SolveStatus },

    #[error("Solver failed: {0}")]
    SolverFailure(String),

    #[error("Solver assignment violates {violated} capacity constraint(s)")]
    InvalidAssignment { violated: usize },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
