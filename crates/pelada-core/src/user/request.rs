//! Login and profile-update request models.

use serde::{Deserialize, Serialize};

use crate::error::{PeladaError, Result};
use crate::user::model::User;

/// Raw input from the login form.
///
/// Fields arrive as typed by the user; [`LoginRequest::validate`] trims them
/// and rejects anything the original form would have let through as garbage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Display name (required).
    pub name: String,
    /// Email, the identity key (required).
    pub email: String,
    /// Skill tier picked from the level selector (required).
    pub level: String,
}

impl LoginRequest {
    /// Validates the request and builds the [`User`] it describes.
    pub fn validate(&self) -> Result<User> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PeladaError::validation("name", "name cannot be empty"));
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(PeladaError::validation("email", "email cannot be empty"));
        }
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(PeladaError::validation(
                "email",
                format!("'{email}' is not a valid email address"),
            ));
        }

        let level = self.level.trim();
        if level.is_empty() {
            return Err(PeladaError::validation("level", "level cannot be empty"));
        }

        Ok(User::new(name, email, level))
    }
}

/// Input from the profile editor: the two fields it can change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// Favorite position; empty means "clear it".
    pub favorite_position: String,
    /// Photo URL; empty means "clear it".
    pub photo_url: String,
}

impl ProfileUpdate {
    /// Applies the update to a user, trimming both fields and mapping empty
    /// input to `None`.
    pub fn apply_to(&self, user: &mut User) {
        let position = self.favorite_position.trim();
        user.favorite_position = (!position.is_empty()).then(|| position.to_string());

        let photo = self.photo_url.trim();
        user.photo_url = (!photo.is_empty()).then(|| photo.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, level: &str) -> LoginRequest {
        LoginRequest {
            name: name.to_string(),
            email: email.to_string(),
            level: level.to_string(),
        }
    }

    #[test]
    fn test_validate_trims_fields() {
        let user = request("  Maria ", " maria@x.com ", " Intermediário ")
            .validate()
            .unwrap();
        assert_eq!(user.name, "Maria");
        assert_eq!(user.email, "maria@x.com");
        assert_eq!(user.level, "Intermediário");
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let err = request("   ", "a@b.com", "X").validate().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_validate_rejects_bad_email() {
        for email in ["", "not-an-email", "@x.com", "maria@"] {
            let err = request("Maria", email, "X").validate().unwrap_err();
            assert!(err.is_validation(), "email {email:?} should be rejected");
        }
    }

    #[test]
    fn test_profile_update_sets_and_clears() {
        let mut user = User::new("Maria", "maria@x.com", "X");
        ProfileUpdate {
            favorite_position: " Goleira ".to_string(),
            photo_url: String::new(),
        }
        .apply_to(&mut user);
        assert_eq!(user.favorite_position.as_deref(), Some("Goleira"));
        assert!(user.photo_url.is_none());

        ProfileUpdate::default().apply_to(&mut user);
        assert!(user.favorite_position.is_none());
    }
}
