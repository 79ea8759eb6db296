//! User domain model.
//!
//! Represents the single logged-in user: identity, skill level, and the
//! profile fields edited on the profile screen.

use serde::{Deserialize, Serialize};

/// The logged-in user.
///
/// Created at login, mutated on profile save, destroyed on logout. The email
/// is the identity key: it is what ties a user to the confirmed-player
/// snapshots embedded in matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Identity key. A given email appears at most once per match's
    /// confirmed list.
    pub email: String,
    /// Self-declared skill tier (e.g. "Iniciante", "Intermediário").
    pub level: String,
    /// Favorite position, set on the profile screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favorite_position: Option<String>,
    /// Profile photo URL, set on the profile screen.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    /// Career goals tally. Never written by the current screens; kept in the
    /// persisted record so an imported profile displays its stats.
    #[serde(default)]
    pub goals: u32,
    /// Player rating. Same situation as `goals`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl User {
    /// Creates a fresh user as the login form does: identity fields set,
    /// profile fields empty.
    pub fn new(name: impl Into<String>, email: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            level: level.into(),
            favorite_position: None,
            photo_url: None,
            goals: 0,
            rating: None,
        }
    }

    /// First letter of the name, uppercased, for the avatar placeholder.
    pub fn avatar_initial(&self) -> char {
        initial_of(&self.name)
    }
}

/// First letter of a display name, uppercased; `?` for empty names.
///
/// Shared by the user avatar and the player-card projection so the fallback
/// stays identical in both.
pub(crate) fn initial_of(name: &str) -> char {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().next().unwrap_or(c))
        .unwrap_or('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_has_empty_profile() {
        let user = User::new("Maria", "maria@x.com", "Intermediário");
        assert_eq!(user.name, "Maria");
        assert!(user.favorite_position.is_none());
        assert!(user.photo_url.is_none());
        assert_eq!(user.goals, 0);
        assert!(user.rating.is_none());
    }

    #[test]
    fn test_avatar_initial() {
        assert_eq!(User::new("maria", "m@x.com", "A").avatar_initial(), 'M');
        assert_eq!(User::new("", "m@x.com", "A").avatar_initial(), '?');
    }

    #[test]
    fn test_persisted_record_roundtrip() {
        let mut user = User::new("Jo", "jo@x.com", "Avançado");
        user.favorite_position = Some("Goleira".to_string());
        let json = serde_json::to_string(&user).unwrap();
        let back: User = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn test_record_without_optional_fields_deserializes() {
        // Records written before the profile was ever saved.
        let json = r#"{"name":"Ana","email":"ana@x.com","level":"Iniciante"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.goals, 0);
        assert!(user.favorite_position.is_none());
    }
}
