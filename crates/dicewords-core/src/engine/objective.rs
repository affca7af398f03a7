use crate::core::models::catalog::VariableCatalog;
use crate::core::models::program::{LinearExpr, Objective, ObjectiveSense};
use crate::core::scoring::points_for_length;
use tracing::debug;

/// One term per variable: the word's points, signed for `sense`.
///
/// Zero-point words (one or two letters) still get a term, so every variable of the catalog
/// appears in the objective.
pub fn build_objective(catalog: &VariableCatalog, sense: ObjectiveSense) -> Objective {
    let sign = sense.sign();
    let mut expr = LinearExpr::new();
    for (id, candidate) in catalog.iter() {
        expr.push(id, sign * i64::from(points_for_length(candidate.len())));
    }

    debug!(terms = expr.len(), %sense, "Built objective.");
    Objective { sense, expr }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::candidate::CandidateWord;
    use crate::core::models::ids::DieId;
    use crate::core::models::program::Assignment;

    fn catalog(words: &[&str]) -> VariableCatalog {
        words
            .iter()
            .map(|w| CandidateWord::new(w.to_string(), (0..w.len()).map(DieId).collect()))
            .collect()
    }

    #[test]
    fn coefficients_follow_the_score_table() {
        let catalog = catalog(&["at", "cab", "bead", "tiger", "shrimp", "baskets", "elephant"]);
        let objective = build_objective(&catalog, ObjectiveSense::Maximize);

        let coefficients: Vec<i64> = objective
            .expr
            .terms()
            .iter()
            .map(|t| t.coefficient)
            .collect();
        assert_eq!(coefficients, vec![0, 1, 1, 2, 3, 5, 11]);
    }

    #[test]
    fn minimize_negates_every_coefficient() {
        let catalog = catalog(&["cab", "tiger"]);
        let max = build_objective(&catalog, ObjectiveSense::Maximize);
        let min = build_objective(&catalog, ObjectiveSense::Minimize);

        assert_eq!(min.sense, ObjectiveSense::Minimize);
        for (id, _) in catalog.iter() {
            assert_eq!(min.expr.coefficient_of(id), -max.expr.coefficient_of(id));
        }
    }

    #[test]
    fn desirability_is_independent_of_sense() {
        let catalog = catalog(&["cab", "tiger"]);
        let all: Assignment = catalog.ids().map(|id| (id, true)).collect();

        let max = build_objective(&catalog, ObjectiveSense::Maximize);
        let min = build_objective(&catalog, ObjectiveSense::Minimize);
        assert_eq!(max.desirability(&all), 3);
        assert_eq!(min.desirability(&all), 3);
        assert_eq!(min.evaluate(&all), -3);
    }

    #[test]
    fn empty_catalog_gives_zero_term_objective() {
        let objective = build_objective(&VariableCatalog::new(), ObjectiveSense::Maximize);
        assert!(objective.expr.is_empty());
    }
}
