//! Layered configuration for the `build` command.
//!
//! Values are resolved from, in increasing priority: built-in defaults, the TOML config
//! file, `--set KEY=VALUE` overrides, and dedicated command-line flags.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::build_config;
pub use models::{AppConfig, DiceSource};
