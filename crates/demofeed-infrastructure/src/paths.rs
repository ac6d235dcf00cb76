//! Default locations for demofeed files.

use std::path::PathBuf;

use demofeed_core::FeedbackError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("no platform {0} directory for this user")]
    NoPlatformDir(&'static str),
}

impl From<PathError> for FeedbackError {
    fn from(err: PathError) -> Self {
        FeedbackError::io(err.to_string())
    }
}

/// Platform paths for demofeed.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/demofeed/          # Config directory
/// └── config.toml              # Store configuration
///
/// ~/.local/share/demofeed/     # Data directory
/// └── feedback.json            # Default feedback archive
/// ```
pub struct DemofeedPaths;

impl DemofeedPaths {
    const APP_DIR: &'static str = "demofeed";

    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|d| d.join(Self::APP_DIR))
            .ok_or(PathError::NoPlatformDir("config"))
    }

    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|d| d.join(Self::APP_DIR))
            .ok_or(PathError::NoPlatformDir("data"))
    }

    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Archive used when no `--archive` path is given.
    pub fn archive_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("feedback.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file() {
        let config_file = DemofeedPaths::config_file().unwrap();
        assert!(config_file.ends_with("demofeed/config.toml"));
        assert!(config_file.starts_with(DemofeedPaths::config_dir().unwrap()));
    }

    #[test]
    fn test_path_error_becomes_io_error() {
        let err: FeedbackError = PathError::NoPlatformDir("data").into();
        assert!(matches!(err, FeedbackError::Io { .. }));
        assert!(err.to_string().contains("no platform data directory"));
    }

    #[test]
    fn test_archive_file() {
        let archive = DemofeedPaths::archive_file().unwrap();
        assert!(archive.ends_with("feedback.json"));
        assert!(archive.starts_with(DemofeedPaths::data_dir().unwrap()));
    }
}
