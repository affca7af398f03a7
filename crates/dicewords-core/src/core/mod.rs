//! # Core Module
//!
//! Fundamental building blocks shared by the engine and the workflows.
//!
//! ## Architecture
//!
//! - **Data Models** ([`models`]) - Dice, face slots, candidate words, the variable catalog and
//!   the integer program handed to an external solver
//! - **Lexicon** ([`lexicon`]) - The anagram index seam and its in-memory dictionary
//! - **Scoring** ([`scoring`]) - The fixed word-length to points table
//! - **File I/O** ([`io`]) - Dice files and model export for external solvers
//!
//! Everything in this module is free of search state; the stateful enumeration lives in
//! [`crate::engine`].

pub mod io;
pub mod lexicon;
pub mod models;
pub mod scoring;
