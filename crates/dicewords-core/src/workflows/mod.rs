//! # Workflows Module
//!
//! High-level entry points that run a complete model build and interpret the answer of an
//! external solver.
//!
//! ## Overview
//!
//! Workflows tie the engine's stages together: validating the dice, enumerating and aligning
//! candidate words, registering one decision variable per candidate, and deriving the
//! objective and capacity constraints. They report progress through a
//! [`ProgressReporter`](crate::engine::progress::ProgressReporter) and never touch the
//! filesystem.
//!
//! ## Architecture
//!
//! - **Model Build** ([`build`]) - Dice and anagram index in, `IntegerProgram` out
//! - **Word Selection** ([`select`]) - Maps a solver's 0/1 assignment back to words

pub mod build;
pub mod select;
