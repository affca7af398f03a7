//! # dicewords Core Library
//!
//! Finds every dictionary word that a set of letter dice can spell and turns the result into
//! a binary integer program: one decision variable per spellable word instance, an objective
//! weighted by word length, and one capacity constraint per die face.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`DieSet`, `CandidateWord`,
//!   `IntegerProgram`), the anagram index seam, the fixed score table and file I/O.
//!
//! - **[`engine`]: The Logic Core.** The word enumerator, the permutation aligner, and the
//!   builders that derive the objective and the per-face capacity constraints.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together into the complete
//!   model build and the interpretation of an external solver's answer.
//!
//! The library never solves the integer program itself. The model it produces is
//! solver-agnostic and can be handed to any binary programming engine, for example through
//! the CPLEX LP writer in [`core::io::lp`].

pub mod core;
pub mod engine;
pub mod workflows;
