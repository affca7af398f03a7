use crate::core::models::dice::{DieSet, DieSetError};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiceFileError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    DieSet(#[from] DieSetError),
}

/// Reads dice from CSV: one die per row, one face per field.
///
/// Rows may have different lengths. Fields are trimmed and blank fields ignored, so a row
/// consisting only of separators is an empty die and is rejected.
pub fn read_from(reader: impl Read) -> Result<DieSet, DiceFileError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut dice = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let faces: Vec<String> = record
            .iter()
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();
        dice.push(faces);
    }
    Ok(DieSet::new(dice)?)
}

pub fn read_from_path(path: &Path) -> Result<DieSet, DiceFileError> {
    let file = File::open(path).map_err(|e| DiceFileError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    read_from(file)
}
