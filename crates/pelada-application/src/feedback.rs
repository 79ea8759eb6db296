//! Localized feedback text.
//!
//! The original surfaced every outcome through blocking alerts with fixed
//! pt-BR strings. The core returns typed errors instead; this module is the
//! one place that maps them back to the user-facing wording, so a rendering
//! shell can keep the exact same texts.

use pelada_core::error::{AuthGatedAction, PeladaError, UnsupportedFeature};
use pelada_core::user::User;

/// Welcome notice after a successful login.
pub fn welcome(user: &User) -> String {
    format!("Bem-vindo(a), {}!", user.name)
}

/// Notice after a successful attendance confirmation.
pub const PRESENCE_CONFIRMED: &str = "Presença confirmada!";

/// Notice after a successful profile save.
pub const PROFILE_UPDATED: &str = "Perfil atualizado!";

/// Placeholder line rendered in the chat panel of a chat-disabled match.
pub const CHAT_DISABLED_NOTICE: &str = "Chat desativado para esta partida.";

/// The alert text for an error.
pub fn error_alert(err: &PeladaError) -> String {
    match err {
        PeladaError::AuthenticationRequired { action } => match action {
            AuthGatedAction::ConfirmPresence => "Faça login para confirmar presença.".to_string(),
            AuthGatedAction::SendMessage => "Faça login para enviar mensagens.".to_string(),
            AuthGatedAction::ViewProfile | AuthGatedAction::SaveProfile => {
                "Faça login para acessar seu perfil.".to_string()
            }
        },
        PeladaError::AlreadyConfirmed { .. } => "Você já confirmou presença.".to_string(),
        PeladaError::MatchFull { .. } => "Partida lotada.".to_string(),
        PeladaError::ChatDisabled => CHAT_DISABLED_NOTICE.to_string(),
        PeladaError::NotFound { .. } => "Partida não encontrada.".to_string(),
        PeladaError::Validation { reason, .. } => format!("Dados inválidos: {reason}"),
        PeladaError::NotSupported { feature } => match feature {
            UnsupportedFeature::GoogleLogin => {
                "Integração de login Google será adicionada futuramente.".to_string()
            }
            UnsupportedFeature::FacebookLogin => {
                "Integração de login Facebook será adicionada futuramente.".to_string()
            }
            UnsupportedFeature::Search => {
                "Busca aplicada (funcionalidade completa futura).".to_string()
            }
            UnsupportedFeature::Filters => {
                "Filtro aplicado (funcionalidade completa futura).".to_string()
            }
        },
        PeladaError::GeolocationUnsupported => "Geolocalização não suportada.".to_string(),
        PeladaError::GeolocationUnavailable => {
            "Não foi possível obter sua localização.".to_string()
        }
        PeladaError::Io { .. } | PeladaError::Serialization { .. } | PeladaError::Internal(_) => {
            "Algo deu errado. Tente novamente.".to_string()
        }
    }
}
