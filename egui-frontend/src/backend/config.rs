//! # Storage Configuration
//!
//! Resolves where the embedded database lives.
//!
//! Resolution order:
//! 1. `MILK_TRACKER_DATA_DIR` environment variable
//! 2. Platform data directory (`directories::ProjectDirs`)
//! 3. `~/Documents/Milk Tracker`

use anyhow::Result;
use directories::ProjectDirs;
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "MILK_TRACKER_DATA_DIR";

/// File name of the SQLite database inside the data directory
pub const DATABASE_FILE_NAME: &str = "MilkTrackerDB.sqlite";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub database_file: String,
}

impl StorageConfig {
    /// Resolve the configuration from the environment
    pub fn from_env() -> Result<Self> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            let dir = dir.trim();
            if !dir.is_empty() {
                info!("📁 Using data directory from {}: {}", DATA_DIR_ENV, dir);
                return Ok(Self::in_directory(dir));
            }
            warn!("⚠️ {} is set but empty, ignoring it", DATA_DIR_ENV);
        }

        if let Some(project_dirs) = ProjectDirs::from("com", "MilkTracker", "Milk Tracker") {
            let dir = project_dirs.data_dir().to_path_buf();
            info!("📁 Using platform data directory: {}", dir.display());
            return Ok(Self::in_directory(dir));
        }

        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;
        let dir = PathBuf::from(home_dir).join("Documents").join("Milk Tracker");
        info!("📁 Using fallback data directory: {}", dir.display());
        Ok(Self::in_directory(dir))
    }

    /// Store the database in an explicit directory
    pub fn in_directory<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            data_dir: dir.as_ref().to_path_buf(),
            database_file: DATABASE_FILE_NAME.to_string(),
        }
    }

    /// Full path of the SQLite database file
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(&self.database_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_directory_uses_default_file_name() {
        let config = StorageConfig::in_directory("/tmp/milk");

        assert_eq!(config.data_dir, PathBuf::from("/tmp/milk"));
        assert_eq!(config.database_file, "MilkTrackerDB.sqlite");
        assert_eq!(
            config.database_path(),
            PathBuf::from("/tmp/milk").join("MilkTrackerDB.sqlite")
        );
    }
}
