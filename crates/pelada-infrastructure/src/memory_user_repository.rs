//! In-memory implementation of the user repository.
//!
//! Used by tests and by hosts that want a throwaway session with no file
//! persistence.

use std::sync::RwLock;

use pelada_core::error::{PeladaError, Result};
use pelada_core::user::{User, UserRepository};

/// Keeps the "persisted" record in memory only.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    record: RwLock<Option<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository that already holds a record, as if a previous
    /// session had saved one.
    pub fn with_record(user: User) -> Self {
        Self {
            record: RwLock::new(Some(user)),
        }
    }
}

impl UserRepository for InMemoryUserRepository {
    fn load(&self) -> Result<Option<User>> {
        let record = self
            .record
            .read()
            .map_err(|e| PeladaError::internal(format!("record lock poisoned: {e}")))?;
        Ok(record.clone())
    }

    fn save(&self, user: &User) -> Result<()> {
        let mut record = self
            .record
            .write()
            .map_err(|e| PeladaError::internal(format!("record lock poisoned: {e}")))?;
        *record = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut record = self
            .record
            .write()
            .map_err(|e| PeladaError::internal(format!("record lock poisoned: {e}")))?;
        *record = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let repo = InMemoryUserRepository::new();
        repo.save(&User::new("Maria", "maria@x.com", "X")).unwrap();
        assert_eq!(repo.load().unwrap().unwrap().name, "Maria");
        repo.clear().unwrap();
        assert!(repo.load().unwrap().is_none());
    }

    #[test]
    fn test_with_record_hydrates() {
        let repo = InMemoryUserRepository::with_record(User::new("A", "a@x.com", "X"));
        assert!(repo.load().unwrap().is_some());
    }
}
