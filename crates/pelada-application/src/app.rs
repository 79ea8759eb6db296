//! Application facade.
//!
//! `App` owns the state container and the view router and exposes one method
//! per user interaction, mirroring the event handlers of the original
//! single-page app. Every method runs synchronously to completion; the
//! rendering shell calls a method, then repaints from the view accessors.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use pelada_core::error::{AuthGatedAction, PeladaError, Result, UnsupportedFeature};
use pelada_core::location::LocationProvider;
use pelada_core::matches::{ChatMessage, ConfirmedPlayer, CreateMatchRequest, MatchId};
use pelada_core::projection::{self, HeaderView, HomeView, MatchCard, MatchDetailView, ProfileView};
use pelada_core::state::AppState;
use pelada_core::user::{LoginRequest, ProfileUpdate, User, UserRepository};
use pelada_core::view::{View, ViewRouter};

/// Social login providers shown on the auth screen. Both are unimplemented
/// stubs; picking one yields a typed not-supported response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Google,
    Facebook,
}

/// Filter controls on the home screen. All three are unimplemented stubs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
pub enum FilterControl {
    FieldType,
    Level,
    Time,
}

/// What happened to a chat submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatSendOutcome {
    /// Message appended to the match thread.
    Sent,
    /// Whitespace-only input, dropped without touching the log.
    DroppedEmpty,
}

/// The application: state, router, and the infrastructure seams.
pub struct App {
    state: AppState,
    router: ViewRouter,
    users: Arc<dyn UserRepository>,
    location: Arc<dyn LocationProvider>,
}

impl App {
    /// Starts the app: hydrates the user from the persisted record if one
    /// exists and opens the home screen.
    pub fn bootstrap(
        users: Arc<dyn UserRepository>,
        location: Arc<dyn LocationProvider>,
    ) -> Result<Self> {
        let mut state = AppState::new();
        if let Some(user) = users.load()? {
            tracing::info!("restored session for '{}'", user.email);
            state.set_user(user);
        }
        Ok(Self {
            state,
            router: ViewRouter::new(),
            users,
            location,
        })
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    /// The currently visible view.
    pub fn current_view(&self) -> View {
        self.router.current()
    }

    /// Navigates to the auth screen (header login link).
    pub fn open_auth(&mut self) {
        self.router.show(View::Auth);
    }

    /// Returns to the home screen and drops the match selection.
    pub fn back_to_home(&mut self) {
        self.state.clear_selection();
        self.router.show(View::Home);
    }

    // ------------------------------------------------------------------
    // Authentication & profile
    // ------------------------------------------------------------------

    /// Logs in with the form fields, persists the record, and routes home.
    /// Returns the created user for the welcome notice.
    pub fn login(&mut self, request: LoginRequest) -> Result<User> {
        let user = request.validate()?;
        self.users.save(&user)?;
        tracing::info!("user '{}' logged in", user.email);
        self.state.set_user(user.clone());
        self.router.show(View::Home);
        Ok(user)
    }

    /// Social login buttons. Not supported; the contract lives here instead
    /// of in a placeholder alert.
    pub fn social_login(&self, provider: SocialProvider) -> Result<User> {
        let feature = match provider {
            SocialProvider::Google => UnsupportedFeature::GoogleLogin,
            SocialProvider::Facebook => UnsupportedFeature::FacebookLogin,
        };
        Err(PeladaError::NotSupported { feature })
    }

    /// Logs out: removes the persisted record, resets the user, routes home.
    /// Matches stay in memory.
    pub fn logout(&mut self) -> Result<()> {
        self.users.clear()?;
        if let Some(user) = self.state.user() {
            tracing::info!("user '{}' logged out", user.email);
        }
        self.state.clear_user();
        self.router.show(View::Home);
        Ok(())
    }

    /// Opens the profile screen. Blocked when logged out.
    pub fn open_profile(&mut self) -> Result<ProfileView> {
        let view = projection::profile_view(&self.state)
            .ok_or(PeladaError::auth_required(AuthGatedAction::ViewProfile))?;
        self.router.show(View::Profile);
        Ok(view)
    }

    /// Saves the profile editor fields and re-persists the record. Returns
    /// the refreshed profile projection.
    pub fn save_profile(&mut self, update: ProfileUpdate) -> Result<ProfileView> {
        let user = self
            .state
            .user_mut()
            .ok_or(PeladaError::auth_required(AuthGatedAction::SaveProfile))?;
        update.apply_to(user);
        let snapshot = user.clone();
        self.users.save(&snapshot)?;
        tracing::info!("profile updated for '{}'", snapshot.email);
        projection::profile_view(&self.state)
            .ok_or_else(|| PeladaError::internal("profile projection after save"))
    }

    // ------------------------------------------------------------------
    // Matches
    // ------------------------------------------------------------------

    /// Creates a match from the form input. Validation is total; nothing is
    /// appended to the list on failure.
    pub fn create_match(&mut self, request: CreateMatchRequest) -> Result<MatchId> {
        let m = request.validate()?;
        let id = m.id.clone();
        tracing::info!("match '{}' created ({} slots)", m.name, m.capacity);
        self.state.add_match(m);
        Ok(id)
    }

    /// Opens a match: selects it, routes to the detail screen, and returns
    /// the detail projection.
    pub fn open_match(&mut self, id: &MatchId) -> Result<MatchDetailView> {
        let view = self
            .state
            .match_by_id(id)
            .map(projection::match_detail_view)
            .ok_or_else(|| PeladaError::not_found("match", id.as_str()))?;
        self.state.select_match(id.clone());
        self.router.show(View::MatchDetail);
        Ok(view)
    }

    /// Confirms the logged-in user's attendance in the selected match.
    ///
    /// Gate order matches the original: selection, then authentication (with
    /// a redirect to the auth screen), then the duplicate check, then
    /// capacity. On success a denormalized snapshot of the user is appended.
    pub fn confirm_presence(&mut self) -> Result<()> {
        let id = self.selected_match_id()?;
        let Some(user) = self.state.user().cloned() else {
            self.router.show(View::Auth);
            return Err(PeladaError::auth_required(AuthGatedAction::ConfirmPresence));
        };
        let snapshot = ConfirmedPlayer::snapshot_of(&user);
        let m = self
            .state
            .match_by_id_mut(&id)
            .ok_or_else(|| PeladaError::not_found("match", id.as_str()))?;
        m.confirm(snapshot).inspect_err(|err| {
            tracing::warn!("presence rejected for '{}': {}", user.email, err);
        })?;
        tracing::info!("'{}' confirmed presence in match {}", user.email, id);
        Ok(())
    }

    /// Sends a chat message to the selected match's thread.
    ///
    /// Fails when chat is disabled for the match or the user is logged out
    /// (with a redirect to the auth screen). Whitespace-only input is
    /// silently dropped.
    pub fn send_chat_message(&mut self, text: &str) -> Result<ChatSendOutcome> {
        let id = self.selected_match_id()?;
        let chat_enabled = self
            .state
            .match_by_id(&id)
            .ok_or_else(|| PeladaError::not_found("match", id.as_str()))?
            .chat_enabled;
        if !chat_enabled {
            return Err(PeladaError::ChatDisabled);
        }
        let Some(user) = self.state.user().cloned() else {
            self.router.show(View::Auth);
            return Err(PeladaError::auth_required(AuthGatedAction::SendMessage));
        };
        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::debug!("dropped empty chat message");
            return Ok(ChatSendOutcome::DroppedEmpty);
        }
        let m = self
            .state
            .match_by_id_mut(&id)
            .ok_or_else(|| PeladaError::not_found("match", id.as_str()))?;
        m.append_chat(ChatMessage {
            author: user.name,
            text: trimmed.to_string(),
        })?;
        Ok(ChatSendOutcome::Sent)
    }

    // ------------------------------------------------------------------
    // Search / filters / geolocation
    // ------------------------------------------------------------------

    /// Free-text match search. Not supported.
    pub fn search(&self, _query: &str) -> Result<Vec<MatchCard>> {
        Err(PeladaError::NotSupported {
            feature: UnsupportedFeature::Search,
        })
    }

    /// Filter-control changes. Not supported.
    pub fn apply_filter(&self, control: FilterControl) -> Result<Vec<MatchCard>> {
        tracing::debug!("filter '{}' requested", control);
        Err(PeladaError::NotSupported {
            feature: UnsupportedFeature::Filters,
        })
    }

    /// Single-shot position query, formatted for the location field.
    pub fn capture_location(&self) -> Result<String> {
        let coords = self.location.current_position()?;
        Ok(coords.formatted())
    }

    // ------------------------------------------------------------------
    // Projections for the rendering shell
    // ------------------------------------------------------------------

    /// Header navigation state.
    pub fn header_view(&self) -> HeaderView {
        projection::header_view(&self.state)
    }

    /// Home screen match list.
    pub fn home_view(&self) -> HomeView {
        projection::home_view(&self.state)
    }

    /// Detail projection of the selected match, for repaints after a
    /// confirmation or chat send.
    pub fn match_detail_view(&self) -> Option<MatchDetailView> {
        self.state.selected_match().map(projection::match_detail_view)
    }

    /// Read access to the state container.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn selected_match_id(&self) -> Result<MatchId> {
        self.state
            .selected_match_id()
            .cloned()
            .ok_or_else(|| PeladaError::not_found("match", "no match selected"))
    }
}
