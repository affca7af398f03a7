use dicewords::engine::config::BuildConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiceSource {
    File(PathBuf),
    Sample(&'static str),
}

pub struct AppConfig {
    pub dice: DiceSource,
    pub lexicon_path: PathBuf,
    pub output_path: PathBuf,
    pub list_candidates: bool,
    pub core_config: BuildConfig,
}
