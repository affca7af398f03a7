pub mod candidate;
pub mod catalog;
pub mod dice;
pub mod ids;
pub mod program;
pub mod samples;
pub mod solution;
