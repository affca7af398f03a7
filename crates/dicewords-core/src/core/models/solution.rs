use super::program::{Assignment, IntegerProgram};
use std::fmt;

/// Termination status reported by an external solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    Optimal,
    Infeasible,
    Unbounded,
    TimedOut,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SolveStatus::Optimal => "optimal",
            SolveStatus::Infeasible => "infeasible",
            SolveStatus::Unbounded => "unbounded",
            SolveStatus::TimedOut => "timed out",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutcome {
    pub status: SolveStatus,
    pub assignment: Assignment,
}

/// The seam to an external binary programming engine.
///
/// This crate ships no implementation; callers wire in whichever solver they deploy.
pub trait ModelSolver {
    type Error: std::error::Error + Send + Sync + 'static;

    fn solve(&self, program: &IntegerProgram) -> Result<SolverOutcome, Self::Error>;
}
