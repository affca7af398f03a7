//! # Lexicon Module
//!
//! The anagram index consulted by the word search.
//!
//! The search only ever asks one question: which dictionary words are spelled by exactly
//! this sorted multiset of letters? [`index::AnagramIndex`] is that seam. Any key to
//! word-list map can serve as an index; [`dictionary::AnagramDictionary`] is the in-memory
//! implementation, built from a word corpus and persisted as JSON.

pub mod dictionary;
pub mod index;
