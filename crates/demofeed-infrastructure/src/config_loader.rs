//! Loads [`StoreConfig`] from its TOML file.

use std::fs;
use std::path::Path;

use demofeed_core::error::{FeedbackError, Result};
use demofeed_core::StoreConfig;

use crate::paths::DemofeedPaths;

/// Loads the store configuration.
///
/// Reads `path` when given, otherwise the platform default
/// (`~/.config/demofeed/config.toml`). A missing file yields the default
/// configuration; an unreadable or malformed file is a `Config` error.
pub fn load_store_config(path: Option<&Path>) -> Result<StoreConfig> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match DemofeedPaths::config_file() {
            Ok(p) => p,
            Err(e) => {
                tracing::debug!("No config location ({}), using defaults", e);
                return Ok(StoreConfig::default());
            }
        },
    };

    if !path.exists() {
        tracing::debug!("Config file {:?} not found, using defaults", path);
        return Ok(StoreConfig::default());
    }

    let content = fs::read_to_string(&path)
        .map_err(|e| FeedbackError::config(format!("failed to read {:?}: {}", path, e)))?;

    let config = StoreConfig::from_toml_str(&content)
        .map_err(|e| FeedbackError::config(format!("invalid {:?}: {}", path, e)))?;

    tracing::debug!("Loaded config from {:?}: {:?}", path, config);
    Ok(config)
}
