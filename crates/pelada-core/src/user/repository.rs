//! User repository trait.
//!
//! The persistence seam for the single persisted user record. The application
//! reads it once at bootstrap and writes it on every user-affecting mutation;
//! absence of a record means logged out.

use crate::error::Result;
use crate::user::model::User;

/// Repository for the persisted user record.
///
/// Implementations live in the infrastructure crate (JSON file storage, plus
/// an in-memory variant for tests).
pub trait UserRepository: Send + Sync {
    /// Loads the persisted user, if one exists.
    fn load(&self) -> Result<Option<User>>;

    /// Persists the user, replacing any existing record.
    fn save(&self, user: &User) -> Result<()>;

    /// Removes the persisted record. Removing an absent record is not an
    /// error; logout must be idempotent.
    fn clear(&self) -> Result<()>;
}
