use crate::core::models::catalog::VariableCatalog;
use crate::core::models::dice::{DieSet, FaceSlot};
use crate::core::models::program::{CapacityConstraint, LinearExpr};
use std::collections::HashMap;
use tracing::debug;

/// One capacity row per face slot of `dice`, in die-set order.
///
/// A row sums, over the candidates that consume that exact `(letter, die)` slot, the
/// candidate's degree at the consuming position. Zero-degree terms are left out, so rows
/// touched only by single-letter words (or by nothing) come out vacuous. A die carrying the
/// same letter on several faces yields one identical row per face.
///
/// The degree counts adjacent positions in the word, not distinct neighbouring letters, and
/// the bound is applied without regard to board geometry. Both are deliberate
/// approximations of the real adjacency limit.
pub fn build_capacity_constraints(
    dice: &DieSet,
    catalog: &VariableCatalog,
    capacity: u32,
) -> Vec<CapacityConstraint> {
    let mut usage: HashMap<FaceSlot, LinearExpr> = HashMap::new();
    for (id, candidate) in catalog.iter() {
        for (position, slot) in candidate.slots().enumerate() {
            let degree = candidate.degree_at(position);
            if degree > 0 {
                usage
                    .entry(slot)
                    .or_default()
                    .push(id, i64::from(degree));
            }
        }
    }

    let upper_bound = i64::from(capacity);
    let constraints: Vec<CapacityConstraint> = dice
        .face_slots()
        .map(|slot| CapacityConstraint {
            slot,
            expr: usage.get(&slot).cloned().unwrap_or_default(),
            upper_bound,
        })
        .collect();

    debug!(
        rows = constraints.len(),
        vacuous = constraints.iter().filter(|c| c.is_vacuous()).count(),
        "Built capacity constraints."
    );
    constraints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::candidate::CandidateWord;
    use crate::core::models::ids::DieId;
    use crate::core::models::program::Assignment;

    fn candidate(text: &str, dice: &[usize]) -> CandidateWord {
        CandidateWord::new(text.to_string(), dice.iter().copied().map(DieId).collect())
    }

    fn row<'a>(rows: &'a [CapacityConstraint], letter: char, die: usize) -> &'a CapacityConstraint {
        rows.iter()
            .find(|c| c.slot == FaceSlot::new(letter, DieId(die)))
            .unwrap()
    }

    fn small_dice() -> DieSet {
        DieSet::from_letters(["acf", "ccb", "kga", "uoa"]).unwrap()
    }

    #[test]
    fn one_row_per_face_slot_including_repeats() {
        let rows = build_capacity_constraints(&small_dice(), &VariableCatalog::new(), 8);

        assert_eq!(rows.len(), 12);
        let c_on_die_1 = rows
            .iter()
            .filter(|c| c.slot == FaceSlot::new('c', DieId(1)))
            .count();
        assert_eq!(c_on_die_1, 2);
        assert!(rows.iter().all(|c| c.is_vacuous() && c.upper_bound == 8));
    }

    #[test]
    fn degree_weights_ends_once_and_interior_twice() {
        let mut catalog = VariableCatalog::new();
        let cab = catalog.register(candidate("cab", &[0, 2, 1]));
        let rows = build_capacity_constraints(&small_dice(), &catalog, 8);

        assert_eq!(row(&rows, 'c', 0).expr.coefficient_of(cab), 1);
        assert_eq!(row(&rows, 'a', 2).expr.coefficient_of(cab), 2);
        assert_eq!(row(&rows, 'b', 1).expr.coefficient_of(cab), 1);
        assert!(row(&rows, 'a', 0).is_vacuous());
    }

    #[test]
    fn single_letter_words_add_no_terms() {
        let mut catalog = VariableCatalog::new();
        catalog.register(candidate("a", &[0]));
        let rows = build_capacity_constraints(&small_dice(), &catalog, 8);

        assert!(rows.iter().all(CapacityConstraint::is_vacuous));
    }

    #[test]
    fn rows_sum_over_every_consuming_candidate() {
        let mut catalog = VariableCatalog::new();
        let cab = catalog.register(candidate("cab", &[0, 2, 1]));
        let bag = catalog.register(candidate("bag", &[1, 3, 2]));
        let rows = build_capacity_constraints(&small_dice(), &catalog, 3);

        let b_row = row(&rows, 'b', 1);
        assert_eq!(b_row.expr.len(), 2);

        let both: Assignment = [(cab, true), (bag, true)].into_iter().collect();
        assert!(b_row.is_satisfied_by(&both));

        let a_row = row(&rows, 'a', 2);
        assert_eq!(a_row.expr.coefficient_of(cab), 2);
        assert_eq!(a_row.expr.coefficient_of(bag), 0);
    }

    #[test]
    fn capacity_bound_can_be_violated() {
        let mut catalog = VariableCatalog::new();
        let bac = catalog.register(candidate("bac", &[1, 0, 3]));
        let cab = catalog.register(candidate("cab", &[3, 0, 1]));
        let rows = build_capacity_constraints(
            &DieSet::from_letters(["a", "b", "c", "c"]).unwrap(),
            &catalog,
            3,
        );

        let selection: Assignment = [(bac, true), (cab, true)].into_iter().collect();
        let a_row = row(&rows, 'a', 0);
        assert_eq!(a_row.expr.evaluate(&selection), 4);
        assert!(!a_row.is_satisfied_by(&selection));
    }
}
