//! # Engine Module
//!
//! The search and model-construction logic of dicewords.
//!
//! ## Overview
//!
//! Given a validated [`DieSet`](crate::core::models::dice::DieSet) and an
//! [`AnagramIndex`](crate::core::lexicon::index::AnagramIndex), the engine finds every word
//! the dice can spell, maps each letter back to the die that supplies it, and derives the
//! linear objective and the per-face capacity constraints of the integer program.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Search bounds and model parameters
//! - **Word Enumeration** ([`enumerator`]) - Depth-first search over face choices
//! - **Alignment** ([`alignment`]) - Maps word positions to supplying dice
//! - **Objective** ([`objective`]) - Length-weighted word scores with an explicit sense
//! - **Constraints** ([`constraints`]) - Per-face adjacency capacity rows
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-level error type
//!
//! ## Key Capabilities
//!
//! - **Exhaustive, deduplicated enumeration** with value-returning recursion
//! - **Optional parallelism** across top-level branches (`parallel` feature)
//! - **Bounded search** by word length and wall-clock budget

pub mod alignment;
pub mod config;
pub mod constraints;
pub mod enumerator;
pub mod error;
pub mod objective;
pub mod progress;
