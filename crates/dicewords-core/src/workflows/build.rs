use crate::core::lexicon::index::AnagramIndex;
use crate::core::models::candidate::CandidateWord;
use crate::core::models::catalog::VariableCatalog;
use crate::core::models::dice::DieSet;
use crate::core::models::program::IntegerProgram;
use crate::engine::config::BuildConfig;
use crate::engine::constraints::build_capacity_constraints;
use crate::engine::enumerator::{self, EnumerationStats};
use crate::engine::error::EngineError;
use crate::engine::objective::build_objective;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument, warn};

#[derive(Debug, Clone)]
pub struct ModelBuild {
    pub program: IntegerProgram,
    pub stats: EnumerationStats,
}

impl ModelBuild {
    pub fn variables(&self) -> &VariableCatalog {
        &self.program.variables
    }

    /// Candidates in variable registration order.
    pub fn candidates(&self) -> impl Iterator<Item = &CandidateWord> {
        self.program.variables.iter().map(|(_, candidate)| candidate)
    }
}

#[instrument(skip_all, name = "model_build_workflow")]
pub fn run<I>(
    dice: &DieSet,
    index: &I,
    config: &BuildConfig,
    reporter: &ProgressReporter,
) -> Result<ModelBuild, EngineError>
where
    I: AnagramIndex + Sync + ?Sized,
{
    // === Phase 1: Word enumeration ===
    reporter.report(Progress::PhaseStart {
        name: "Word Enumeration",
    });
    let enumeration = enumerator::enumerate(dice, index, &config.enumeration, reporter)?;
    reporter.report(Progress::PhaseFinish);

    if enumeration.candidates.is_empty() {
        warn!("No dictionary word can be spelled with these dice; the model will be empty.");
    }

    // === Phase 2: Decision variables ===
    let variables: VariableCatalog = reporter.phase("Variable Catalog", || {
        enumeration.candidates.into_iter().collect()
    });

    // === Phase 3: Objective and capacity constraints ===
    let program = reporter.phase("Model Construction", || {
        let objective = build_objective(&variables, config.model.objective_sense);
        let constraints =
            build_capacity_constraints(dice, &variables, config.model.face_capacity);
        IntegerProgram {
            variables,
            objective,
            constraints,
        }
    });

    info!(
        variables = program.variables.len(),
        constraints = program.constraints.len(),
        sense = %program.objective.sense,
        "Model build complete."
    );
    Ok(ModelBuild {
        program,
        stats: enumeration.stats,
    })
}

/// Validates raw dice and runs a build with the default configuration and no progress
/// reporting.
///
/// Invalid dice (none at all, an empty die, a non-letter face) are rejected before the
/// index is consulted.
pub fn build<D, F, I>(dice: D, index: &I) -> Result<ModelBuild, EngineError>
where
    D: IntoIterator,
    D::Item: IntoIterator<Item = F>,
    F: AsRef<str>,
    I: AnagramIndex + Sync + ?Sized,
{
    let dice = DieSet::new(dice)?;
    run(
        &dice,
        index,
        &BuildConfig::default(),
        &ProgressReporter::new(),
    )
}
