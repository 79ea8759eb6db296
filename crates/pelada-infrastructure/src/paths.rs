//! Unified path management for Pelada storage.
//!
//! The app persists exactly one record (the user), stored as a JSON file
//! under the platform config directory. Tests point the base directory at a
//! temp dir via [`PeladaPaths::with_base_dir`].
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/pelada/            # Config directory (platform-dependent)
//! └── pelada_user.json         # The persisted user record
//! ```

use std::path::PathBuf;

/// Fixed storage key for the persisted user record.
pub const USER_RECORD_FILE: &str = "pelada_user.json";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path resolution for Pelada storage files.
#[derive(Debug, Clone, Default)]
pub struct PeladaPaths {
    base_override: Option<PathBuf>,
}

impl PeladaPaths {
    /// Resolves against the platform config directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves against an explicit base directory instead (tests).
    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            base_override: Some(base.into()),
        }
    }

    /// Returns the Pelada storage directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/pelada/`, or the override
    /// - `Err(PathError::ConfigDirNotFound)`: platform dir unavailable
    pub fn storage_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(base) = &self.base_override {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("pelada"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the persisted user record.
    pub fn user_record_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.storage_dir()?.join(USER_RECORD_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let paths = PeladaPaths::with_base_dir("/tmp/pelada-test");
        assert_eq!(
            paths.user_record_file().unwrap(),
            PathBuf::from("/tmp/pelada-test").join(USER_RECORD_FILE)
        );
    }

    #[test]
    fn test_user_record_file_is_under_storage_dir() {
        let paths = PeladaPaths::with_base_dir("/tmp/x");
        let file = paths.user_record_file().unwrap();
        assert!(file.starts_with(paths.storage_dir().unwrap()));
    }
}
