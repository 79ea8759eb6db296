//! JSON file implementation of the user repository.
//!
//! The persisted record is one JSON-serialized [`User`] in a fixed file;
//! absence of the file means logged out. Single actor, last write wins.

use std::fs;
use std::path::PathBuf;

use pelada_core::error::{PeladaError, Result};
use pelada_core::user::{User, UserRepository};

use crate::paths::PeladaPaths;

/// Stores the user record as a JSON file under the Pelada storage directory.
#[derive(Debug, Clone)]
pub struct JsonUserRepository {
    path: PathBuf,
}

impl JsonUserRepository {
    /// Creates a repository resolving its file via the given paths.
    pub fn new(paths: &PeladaPaths) -> Result<Self> {
        let path = paths
            .user_record_file()
            .map_err(|e| PeladaError::io(e.to_string()))?;
        Ok(Self { path })
    }

    /// The file backing this repository.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl UserRepository for JsonUserRepository {
    fn load(&self) -> Result<Option<User>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&self.path)?;
        let user = serde_json::from_str(&raw)?;
        Ok(Some(user))
    }

    fn save(&self, user: &User) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(user)?;
        fs::write(&self.path, json)?;
        tracing::debug!("persisted user record for '{}'", user.email);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
