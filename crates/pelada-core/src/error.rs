//! Error types for the Pelada application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The user action that required authentication.
///
/// Carried by [`PeladaError::AuthenticationRequired`] so the feedback layer
/// can pick the matching alert text for each gated action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthGatedAction {
    /// Confirming attendance in a match.
    ConfirmPresence,
    /// Sending a chat message in a match thread.
    SendMessage,
    /// Opening the profile view.
    ViewProfile,
    /// Saving profile changes.
    SaveProfile,
}

/// Features that exist in the interface but are not supported yet.
///
/// These replace the original placeholder alerts: the contract is visible in
/// the API instead of buried in UI text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedFeature {
    /// Google social login button.
    #[strum(serialize = "login Google")]
    GoogleLogin,
    /// Facebook social login button.
    #[strum(serialize = "login Facebook")]
    FacebookLogin,
    /// Free-text match search.
    #[strum(serialize = "busca")]
    Search,
    /// Match list filter controls.
    #[strum(serialize = "filtros")]
    Filters,
}

/// A shared error type for the entire Pelada application.
///
/// Provides typed, structured error variants with automatic conversion from
/// common error types via the `From` trait.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum PeladaError {
    /// The action requires a logged-in user.
    #[error("authentication required for {action:?}")]
    AuthenticationRequired {
        /// The action the user attempted.
        action: AuthGatedAction,
    },

    /// The match already has as many confirmed players as its capacity allows.
    #[error("match is full ({capacity} players)")]
    MatchFull { capacity: u32 },

    /// The user's email is already in the match's confirmed list.
    #[error("'{email}' already confirmed attendance")]
    AlreadyConfirmed { email: String },

    /// Chat is disabled for this match.
    #[error("chat is disabled for this match")]
    ChatDisabled,

    /// Entity not found error with type information.
    #[error("entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// A creation or update input failed validation.
    #[error("invalid {field}: {reason}")]
    Validation {
        field: &'static str,
        reason: String,
    },

    /// Feature present in the interface but not implemented.
    #[error("feature not supported: {feature}")]
    NotSupported { feature: UnsupportedFeature },

    /// The platform offers no geolocation capability.
    #[error("geolocation is not supported on this platform")]
    GeolocationUnsupported,

    /// The geolocation capability exists but could not produce a position.
    #[error("could not determine current position")]
    GeolocationUnavailable,

    /// IO error (file system operations).
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Internal error (should not happen in normal operation).
    #[error("internal error: {0}")]
    Internal(String),
}

impl PeladaError {
    /// Creates an AuthenticationRequired error.
    pub fn auth_required(action: AuthGatedAction) -> Self {
        Self::AuthenticationRequired { action }
    }

    /// Creates a NotFound error.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates a Validation error.
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Creates an Io error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an authentication-required error.
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthenticationRequired { .. })
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a not-supported capability response.
    pub fn is_not_supported(&self) -> bool {
        matches!(self, Self::NotSupported { .. })
    }
}

impl From<std::io::Error> for PeladaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for PeladaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, PeladaError>`.
pub type Result<T> = std::result::Result<T, PeladaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_required_helper() {
        let err = PeladaError::auth_required(AuthGatedAction::ConfirmPresence);
        assert!(err.is_auth_required());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_display() {
        let err = PeladaError::not_found("match", "1234");
        assert_eq!(err.to_string(), "entity not found: match '1234'");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: PeladaError = io.into();
        assert!(matches!(err, PeladaError::Io { .. }));
    }

    #[test]
    fn test_unsupported_feature_display() {
        assert_eq!(UnsupportedFeature::Search.to_string(), "busca");
        assert_eq!(UnsupportedFeature::GoogleLogin.to_string(), "login Google");
    }
}
