pub mod build;
pub mod index;
