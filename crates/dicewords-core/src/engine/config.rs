use crate::core::models::program::ObjectiveSense;
use std::time::Duration;
use thiserror::Error;

/// Bound on how many times a single die face may be used, weighted by adjacency, across the
/// selected words. Eight is the neighbour count of an interior cell on a rectangular board.
pub const DEFAULT_FACE_CAPACITY: u32 = 8;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Longest word the search will build. `None` lets the dice decide.
    pub max_word_length: Option<usize>,
    /// Wall-clock budget for the word search, checked at every search node.
    pub time_budget: Option<Duration>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub objective_sense: ObjectiveSense,
    pub face_capacity: u32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            objective_sense: ObjectiveSense::Maximize,
            face_capacity: DEFAULT_FACE_CAPACITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    pub enumeration: EnumerationConfig,
    pub model: ModelConfig,
}

#[derive(Default)]
pub struct BuildConfigBuilder {
    max_word_length: Option<usize>,
    time_budget: Option<Duration>,
    objective_sense: Option<ObjectiveSense>,
    face_capacity: Option<u32>,
}

impl BuildConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_word_length(mut self, length: usize) -> Self {
        self.max_word_length = Some(length);
        self
    }
    pub fn time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
    pub fn objective_sense(mut self, sense: ObjectiveSense) -> Self {
        self.objective_sense = Some(sense);
        self
    }
    pub fn face_capacity(mut self, capacity: u32) -> Self {
        self.face_capacity = Some(capacity);
        self
    }

    pub fn build(self) -> Result<BuildConfig, ConfigError> {
        if self.max_word_length == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "max_word_length",
                reason: "must be at least 1",
            });
        }
        if self.face_capacity == Some(0) {
            return Err(ConfigError::InvalidParameter {
                name: "face_capacity",
                reason: "must be at least 1",
            });
        }

        let defaults = ModelConfig::default();
        Ok(BuildConfig {
            enumeration: EnumerationConfig {
                max_word_length: self.max_word_length,
                time_budget: self.time_budget,
            },
            model: ModelConfig {
                objective_sense: self.objective_sense.unwrap_or(defaults.objective_sense),
                face_capacity: self.face_capacity.unwrap_or(defaults.face_capacity),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_defaults() {
        let config = BuildConfigBuilder::new().build().unwrap();
        assert_eq!(config, BuildConfig::default());
        assert_eq!(config.model.face_capacity, 8);
        assert_eq!(config.model.objective_sense, ObjectiveSense::Maximize);
        assert!(config.enumeration.max_word_length.is_none());
    }

    #[test]
    fn builder_sets_every_field() {
        let config = BuildConfigBuilder::new()
            .max_word_length(6)
            .time_budget(Duration::from_secs(3))
            .objective_sense(ObjectiveSense::Minimize)
            .face_capacity(4)
            .build()
            .unwrap();

        assert_eq!(config.enumeration.max_word_length, Some(6));
        assert_eq!(config.enumeration.time_budget, Some(Duration::from_secs(3)));
        assert_eq!(config.model.objective_sense, ObjectiveSense::Minimize);
        assert_eq!(config.model.face_capacity, 4);
    }

    #[test]
    fn zero_word_length_is_rejected() {
        let err = BuildConfigBuilder::new().max_word_length(0).build();
        assert!(matches!(
            err,
            Err(ConfigError::InvalidParameter {
                name: "max_word_length",
                ..
            })
        ));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = BuildConfigBuilder::new().face_capacity(0).build();
        assert!(matches!(
            err,
            Err(ConfigError::InvalidParameter {
                name: "face_capacity",
                ..
            })
        ));
    }
}
