use super::traits::ModelWriter;
use crate::core::models::catalog::VariableCatalog;
use crate::core::models::ids::VariableId;
use crate::core::models::program::{IntegerProgram, LinearExpr, ObjectiveSense};
use std::io::{self, Write};
use thiserror::Error;

const TERMS_PER_LINE: usize = 8;

#[derive(Debug, Error)]
pub enum LpError {
    #[error("I/O error while writing LP model: {0}")]
    Io(#[from] io::Error),

    #[error("Expression references a variable that is not in the catalog: {0:?}")]
    UnknownVariable(VariableId),

    #[error("Name '{0}' cannot be written in LP format (only ASCII names are allowed)")]
    InvalidName(String),
}

/// CPLEX LP text format.
///
/// Capacity rows without terms hold trivially and are left out of the file; row names keep
/// the row's position in the program so that they stay stable across builds.
pub struct LpFile;

impl ModelWriter for LpFile {
    type Error = LpError;

    fn write_to(program: &IntegerProgram, writer: &mut impl Write) -> Result<(), LpError> {
        let catalog = &program.variables;

        writeln!(
            writer,
            "\\ dicewords model: {} variables, {} capacity constraints",
            catalog.len(),
            program.constraints.len()
        )?;

        let sense = match program.objective.sense {
            ObjectiveSense::Maximize => "Maximize",
            ObjectiveSense::Minimize => "Minimize",
        };
        writeln!(writer, "{}", sense)?;
        write!(writer, " obj:")?;
        write_terms(writer, &program.objective.expr, catalog)?;
        writeln!(writer)?;

        writeln!(writer, "Subject To")?;
        for (index, constraint) in program.constraints.iter().enumerate() {
            if constraint.is_vacuous() {
                continue;
            }
            let name = ascii_name(format!(
                "cap_{}_{}_d{}",
                index, constraint.slot.letter, constraint.slot.die
            ))?;
            write!(writer, " {}:", name)?;
            write_terms(writer, &constraint.expr, catalog)?;
            writeln!(writer, " <= {}", constraint.upper_bound)?;
        }

        writeln!(writer, "Binary")?;
        for id in catalog.ids() {
            writeln!(writer, " {}", variable_name(catalog, id)?)?;
        }
        writeln!(writer, "End")?;
        Ok(())
    }
}

fn write_terms(
    writer: &mut impl Write,
    expr: &LinearExpr,
    catalog: &VariableCatalog,
) -> Result<(), LpError> {
    for (i, term) in expr.terms().iter().enumerate() {
        let name = variable_name(catalog, term.variable)?;
        if i > 0 && i % TERMS_PER_LINE == 0 {
            write!(writer, "\n   ")?;
        }
        let magnitude = term.coefficient.unsigned_abs();
        if term.coefficient < 0 {
            write!(writer, " - {} {}", magnitude, name)?;
        } else if i == 0 {
            write!(writer, " {} {}", magnitude, name)?;
        } else {
            write!(writer, " + {} {}", magnitude, name)?;
        }
    }
    Ok(())
}

fn variable_name(catalog: &VariableCatalog, id: VariableId) -> Result<String, LpError> {
    let name = catalog
        .variable_name(id)
        .ok_or(LpError::UnknownVariable(id))?;
    ascii_name(name)
}

fn ascii_name(name: String) -> Result<String, LpError> {
    if name.is_ascii() {
        Ok(name)
    } else {
        Err(LpError::InvalidName(name))
    }
}
