use std::fs;
use std::path::Path;

use tracing::debug;

use crate::io::data_io::DataError;
use crate::model::config::ScorecardConfig;

/// File looked up in the working directory when no config path is given
pub const DEFAULT_CONFIG_FILE: &str = "scorecard.toml";

/// Read and parse a config file.
pub fn read_config(path: &Path) -> Result<ScorecardConfig, DataError> {
    let text = fs::read_to_string(path).map_err(|e| DataError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let config = toml::from_str(&text)?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load the config from an explicit path, or from `scorecard.toml` in `dir`
/// if present, or fall back to defaults. An explicit path must exist.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<ScorecardConfig, DataError> {
    if let Some(path) = explicit {
        return read_config(path);
    }
    let implicit = dir.join(DEFAULT_CONFIG_FILE);
    if implicit.is_file() {
        read_config(&implicit)
    } else {
        Ok(ScorecardConfig::default())
    }
}
