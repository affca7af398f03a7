use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, DiceSource};
use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use dicewords::core::models::program::ObjectiveSense;
use dicewords::engine::config::BuildConfigBuilder;
use std::time::Duration;

pub fn build_config(args: &BuildArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let enumeration_file = file_config.enumeration.take().unwrap_or_default();
    let max_word_length = args
        .max_word_length
        .or(enumeration_file.max_word_length)
        .or(defaults.max_word_length);
    let time_budget = match args.time_budget {
        Some(budget) => Some(budget),
        None => enumeration_file
            .time_budget_secs
            .map(seconds_to_duration)
            .transpose()?
            .or(defaults.time_budget),
    };

    let model_file = file_config.model.take().unwrap_or_default();
    let objective_sense = match (args.objective_sense.maximize, args.objective_sense.minimize) {
        (true, false) => ObjectiveSense::Maximize,
        (false, true) => ObjectiveSense::Minimize,
        _ => model_file
            .objective_sense
            .unwrap_or(defaults.objective_sense),
    };
    let face_capacity = args
        .face_capacity
        .or(model_file.face_capacity)
        .unwrap_or(defaults.face_capacity);

    let mut builder = BuildConfigBuilder::new()
        .objective_sense(objective_sense)
        .face_capacity(face_capacity);
    if let Some(length) = max_word_length {
        builder = builder.max_word_length(length);
    }
    if let Some(budget) = time_budget {
        builder = builder.time_budget(budget);
    }
    let core_config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let dice = match (&args.dice.dice, args.dice.sample) {
        (Some(path), _) => DiceSource::File(path.clone()),
        (None, Some(name)) => DiceSource::Sample(name),
        (None, None) => {
            return Err(CliError::Argument(
                "Either --dice or --sample must be given.".to_string(),
            ));
        }
    };

    Ok(AppConfig {
        dice,
        lexicon_path: args.lexicon.clone(),
        output_path: args.output.clone(),
        list_candidates: args.list,
        core_config,
    })
}

fn seconds_to_duration(seconds: f64) -> Result<Duration> {
    Duration::try_from_secs_f64(seconds).map_err(|_| {
        CliError::Config(format!(
            "Invalid value for enumeration.time-budget-secs: {}",
            seconds
        ))
    })
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let (key, value_str) =
            parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;

        match key {
            "enumeration.max-word-length" => {
                config
                    .enumeration
                    .get_or_insert_with(Default::default)
                    .max_word_length = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            "enumeration.time-budget-secs" => {
                config
                    .enumeration
                    .get_or_insert_with(Default::default)
                    .time_budget_secs = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?);
            }
            "model.objective-sense" => {
                config
                    .model
                    .get_or_insert_with(Default::default)
                    .objective_sense = Some(
                    value_str
                        .parse()
                        .map_err(|e| CliError::Config(format!("{} ({})", e, key)))?,
                );
            }
            "model.face-capacity" => {
                config
                    .model
                    .get_or_insert_with(Default::default)
                    .face_capacity = Some(value_str.parse().map_err(|_| {
                    CliError::Config(format!("Invalid integer value for {}: {}", key, value_str))
                })?);
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}
