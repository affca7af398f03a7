use dicewords::core::models::program::ObjectiveSense;
use dicewords::engine::config::DEFAULT_FACE_CAPACITY;
use std::time::Duration;

pub struct DefaultsConfig {
    pub max_word_length: Option<usize>,
    pub time_budget: Option<Duration>,
    pub objective_sense: ObjectiveSense,
    pub face_capacity: u32,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            max_word_length: None,
            time_budget: None,
            objective_sense: ObjectiveSense::Maximize,
            face_capacity: DEFAULT_FACE_CAPACITY,
        }
    }
}
