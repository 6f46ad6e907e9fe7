use serde::de::DeserializeOwned;
use std::fs;

use crate::error::{PlacementError, Result};

/// Parses a JSON file into a given type `T`.
///
/// Errors are converted into `crate::error::PlacementError` variants:
/// - `IoError` if the file cannot be read.
/// - `DeserializationError` if the JSON is malformed.
pub fn parse_json_file<T: DeserializeOwned>(file_path: &str) -> Result<T> {
    let data = fs::read_to_string(file_path).map_err(PlacementError::IoError)?;

    let parsed_data: T = serde_json::from_str(&data).map_err(PlacementError::DeserializationError)?;

    Ok(parsed_data)
}
