use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::model::producer::FilterData;

/// Error type for reading input files
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    JsonParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not parse config: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

/// Read and decode a JSON file.
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataError> {
    let text = fs::read_to_string(path).map_err(|e| DataError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&text).map_err(|e| DataError::JsonParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the dataset a scorecard page is rendered from.
pub fn read_filter_data(path: &Path) -> Result<FilterData, DataError> {
    let data: FilterData = read_json(path)?;
    debug!(
        path = %path.display(),
        producers = data.producers.len(),
        filters = data.filters.len(),
        "loaded filter data"
    );
    Ok(data)
}

/// Load a producer JSON document as-is (key order preserved).
pub fn read_bp_json(path: &Path) -> Result<serde_json::Value, DataError> {
    read_json(path)
}
