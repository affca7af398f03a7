use dicewords::core::models::samples;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown sample die set '{0}'. Expected one of: {names}.", names = samples::NAMES.join(", "))]
    UnknownSample(String),

    #[error("Invalid duration '{0}'. Expected a non-negative number of seconds (e.g., '2.5').")]
    InvalidDuration(String),

    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),
}

/// Resolves a sample set name to its canonical static name.
pub fn parse_sample_name(name: &str) -> Result<&'static str, ParseError> {
    let wanted = name.trim().to_ascii_lowercase();
    samples::NAMES
        .iter()
        .copied()
        .find(|&candidate| candidate == wanted)
        .ok_or_else(|| ParseError::UnknownSample(name.to_string()))
}

pub fn parse_seconds(value: &str) -> Result<Duration, ParseError> {
    let seconds: f64 = value
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidDuration(value.to_string()))?;
    Duration::try_from_secs_f64(seconds).map_err(|_| ParseError::InvalidDuration(value.to_string()))
}

/// Splits `KEY=VALUE` at the first `=`.
pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    match pair.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
        _ => Err(ParseError::InvalidKeyValue(pair.to_string())),
    }
}
