use super::catalog::VariableCatalog;
use super::dice::FaceSlot;
use super::ids::VariableId;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A 0/1 value per decision variable. Variables absent from the map are 0.
pub type Assignment = HashMap<VariableId, bool>;

/// Direction in which the external solver optimises the objective.
///
/// Word scores are non-negative desirability values. Under `Maximize` they are emitted as-is;
/// under `Minimize` they are negated, so both senses prefer high-scoring selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectiveSense {
    #[default]
    Maximize,
    Minimize,
}

impl ObjectiveSense {
    /// Multiplier applied to a desirability score to obtain its objective coefficient.
    pub fn sign(self) -> i64 {
        match self {
            ObjectiveSense::Maximize => 1,
            ObjectiveSense::Minimize => -1,
        }
    }
}

impl fmt::Display for ObjectiveSense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectiveSense::Maximize => write!(f, "maximize"),
            ObjectiveSense::Minimize => write!(f, "minimize"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unknown objective sense '{0}'. Expected 'maximize' or 'minimize'.")]
pub struct ParseObjectiveSenseError(String);

impl FromStr for ObjectiveSense {
    type Err = ParseObjectiveSenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "maximize" | "max" => Ok(ObjectiveSense::Maximize),
            "minimize" | "min" => Ok(ObjectiveSense::Minimize),
            _ => Err(ParseObjectiveSenseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Term {
    pub variable: VariableId,
    pub coefficient: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinearExpr {
    terms: Vec<Term>,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, variable: VariableId, coefficient: i64) {
        self.terms.push(Term {
            variable,
            coefficient,
        });
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn coefficient_of(&self, variable: VariableId) -> i64 {
        self.terms
            .iter()
            .filter(|term| term.variable == variable)
            .map(|term| term.coefficient)
            .sum()
    }

    pub fn evaluate(&self, assignment: &Assignment) -> i64 {
        self.terms
            .iter()
            .filter(|term| assignment.get(&term.variable).copied().unwrap_or(false))
            .map(|term| term.coefficient)
            .sum()
    }
}

impl FromIterator<Term> for LinearExpr {
    fn from_iter<T: IntoIterator<Item = Term>>(iter: T) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Objective {
    pub sense: ObjectiveSense,
    pub expr: LinearExpr,
}

impl Objective {
    pub fn evaluate(&self, assignment: &Assignment) -> i64 {
        self.expr.evaluate(assignment)
    }

    /// Total word score of the selection, independent of the sense.
    pub fn desirability(&self, assignment: &Assignment) -> i64 {
        self.evaluate(assignment) * self.sense.sign()
    }
}

/// `Σ degree × x ≤ upper_bound` over the candidates that consume one face slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityConstraint {
    pub slot: FaceSlot,
    pub expr: LinearExpr,
    pub upper_bound: i64,
}

impl CapacityConstraint {
    /// A row with no terms holds for every assignment.
    pub fn is_vacuous(&self) -> bool {
        self.expr.is_empty()
    }

    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.expr.evaluate(assignment) <= self.upper_bound
    }
}

/// The solver-agnostic binary program: variables, objective and constraints.
#[derive(Debug, Clone)]
pub struct IntegerProgram {
    pub variables: VariableCatalog,
    pub objective: Objective,
    pub constraints: Vec<CapacityConstraint>,
}

impl IntegerProgram {
    pub fn violated_constraints<'a>(
        &'a self,
        assignment: &'a Assignment,
    ) -> impl Iterator<Item = &'a CapacityConstraint> + 'a {
        self.constraints
            .iter()
            .filter(move |constraint| !constraint.is_satisfied_by(assignment))
    }

    pub fn is_feasible(&self, assignment: &Assignment) -> bool {
        self.violated_constraints(assignment).next().is_none()
    }
}
