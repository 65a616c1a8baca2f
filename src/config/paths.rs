//! Path management for ClearCoin
//!
//! ## Path Resolution Order
//!
//! 1. `CLEARCOIN_DATA_DIR` environment variable (if set)
//! 2. The platform data directory reported by `directories`
//!    (e.g. `~/.local/share/clearcoin` on Linux)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ClearCoinError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "CLEARCOIN_DATA_DIR";

/// Manages all paths used by ClearCoin
#[derive(Debug, Clone)]
pub struct ClearCoinPaths {
    /// Base directory for all ClearCoin data
    base_dir: PathBuf,
}

impl ClearCoinPaths {
    /// Create a new ClearCoinPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform data directory can be determined
    /// and the override variable is not set.
    pub fn new() -> Result<Self, ClearCoinError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ClearCoinPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding one JSON file per storage key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the diagnostic log used while the TUI owns the terminal
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("clearcoin.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ClearCoinError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ClearCoinError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ClearCoinError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, ClearCoinError> {
    let dirs = ProjectDirs::from("", "", "clearcoin").ok_or_else(|| {
        ClearCoinError::Config("Could not determine a data directory for clearcoin".into())
    })?;
    Ok(dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ClearCoinPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("clearcoin.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ClearCoinPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
    }
}
