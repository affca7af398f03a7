use super::build::ModelBuild;
use crate::core::models::candidate::CandidateWord;
use crate::core::models::program::IntegerProgram;
use crate::core::models::solution::{ModelSolver, SolveStatus, SolverOutcome};
use crate::engine::error::EngineError;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Chosen candidates in variable registration order.
    pub words: Vec<CandidateWord>,
    /// Total points of the chosen words.
    pub score: i64,
}

/// Reads the chosen candidates out of a solver's answer.
///
/// Any status other than [`SolveStatus::Optimal`] is returned as [`EngineError::Solver`]
/// unchanged. An optimal assignment that breaks a capacity row, or that selects a variable
/// the program does not know, is rejected rather than trusted.
pub fn selected_words<'a>(
    program: &'a IntegerProgram,
    outcome: &SolverOutcome,
) -> Result<Vec<&'a CandidateWord>, EngineError> {
    if outcome.status != SolveStatus::Optimal {
        return Err(EngineError::Solver {
            status: outcome.status,
        });
    }

    let violated = program.violated_constraints(&outcome.assignment).count();
    if violated > 0 {
        return Err(EngineError::InvalidAssignment { violated });
    }

    if let Some(unknown) = outcome
        .assignment
        .iter()
        .find(|&(&id, &chosen)| chosen && program.variables.candidate(id).is_none())
    {
        return Err(EngineError::Internal(format!(
            "Solver selected variable {:?}, which is not part of the model",
            unknown.0
        )));
    }

    Ok(program
        .variables
        .iter()
        .filter(|(id, _)| outcome.assignment.get(id).copied().unwrap_or(false))
        .map(|(_, candidate)| candidate)
        .collect())
}

/// Hands the built model to `solver` and interprets its answer. No retry is attempted.
#[instrument(skip_all, name = "word_selection_workflow")]
pub fn run<S>(build: &ModelBuild, solver: &S) -> Result<Selection, EngineError>
where
    S: ModelSolver,
{
    let program = &build.program;
    info!(
        variables = program.variables.len(),
        "Handing model to external solver."
    );

    let outcome = solver
        .solve(program)
        .map_err(|e| EngineError::SolverFailure(e.to_string()))?;
    if outcome.status != SolveStatus::Optimal {
        warn!(status = %outcome.status, "Solver did not reach an optimal solution.");
    }

    let words: Vec<CandidateWord> = selected_words(program, &outcome)?
        .into_iter()
        .cloned()
        .collect();
    let score = program.objective.desirability(&outcome.assignment);

    info!(words = words.len(), score, "Word selection complete.");
    Ok(Selection { words, score })
}
