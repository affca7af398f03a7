//! # File I/O Module
//!
//! Reading dice from disk and exporting built models for external solvers.
//!
//! - [`dice`] - Dice files in CSV form, one die per row
//! - [`traits`] - The [`traits::ModelWriter`] interface shared by model export formats
//! - [`lp`] - The CPLEX LP text format understood by most binary programming engines

pub mod dice;
pub mod lp;
pub mod traits;
