//! Application state container.
//!
//! The one mutable record every handler reads and writes: the current user,
//! the ordered match list, and the currently-selected match. Passed
//! explicitly; fields are private so all mutation goes through the methods
//! below.

use crate::matches::{Match, MatchId};
use crate::user::User;

/// In-memory application state.
///
/// Initialized empty at startup; the user field is hydrated from the
/// persisted record if one exists and reset on logout. Matches live only
/// here and are gone when the process ends.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    user: Option<User>,
    matches: Vec<Match>,
    selected_match_id: Option<MatchId>,
}

impl AppState {
    /// Creates an empty state: logged out, no matches, nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Mutable access to the logged-in user, if any.
    pub fn user_mut(&mut self) -> Option<&mut User> {
        self.user.as_mut()
    }

    /// Whether a user is logged in.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Sets the logged-in user (login or bootstrap hydration).
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Clears the logged-in user (logout).
    pub fn clear_user(&mut self) {
        self.user = None;
    }

    /// All matches, in creation order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Appends a newly created match.
    pub fn add_match(&mut self, m: Match) {
        self.matches.push(m);
    }

    /// Looks up a match by id.
    pub fn match_by_id(&self, id: &MatchId) -> Option<&Match> {
        self.matches.iter().find(|m| &m.id == id)
    }

    /// Mutable lookup by id.
    pub fn match_by_id_mut(&mut self, id: &MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| &m.id == id)
    }

    /// The currently-selected match id, if any.
    pub fn selected_match_id(&self) -> Option<&MatchId> {
        self.selected_match_id.as_ref()
    }

    /// Selects a match (opening the detail view).
    pub fn select_match(&mut self, id: MatchId) {
        self.selected_match_id = Some(id);
    }

    /// Clears the selection (leaving the detail view).
    pub fn clear_selection(&mut self) {
        self.selected_match_id = None;
    }

    /// The currently-selected match, if the selection still resolves.
    pub fn selected_match(&self) -> Option<&Match> {
        self.selected_match_id
            .as_ref()
            .and_then(|id| self.matches.iter().find(|m| &m.id == id))
    }

    /// Mutable access to the currently-selected match.
    pub fn selected_match_mut(&mut self) -> Option<&mut Match> {
        let id = self.selected_match_id.clone()?;
        self.match_by_id_mut(&id)
    }

    /// Matches in which the given email holds a confirmed slot, in creation
    /// order. Feeds the profile stats and history.
    pub fn matches_played_by<'a>(&'a self, email: &'a str) -> impl Iterator<Item = &'a Match> {
        self.matches.iter().filter(move |m| m.has_confirmed(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::{ConfirmedPlayer, CreateMatchRequest};

    fn make_match(name: &str) -> Match {
        CreateMatchRequest {
            name: name.to_string(),
            date: "2026-09-10".to_string(),
            time: "19:00".to_string(),
            place: "Arena".to_string(),
            capacity: "10".to_string(),
            field_type: "Society".to_string(),
            fee: String::new(),
            gender: "Misto".to_string(),
            chat_enabled: false,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = AppState::new();
        assert!(!state.is_authenticated());
        assert!(state.matches().is_empty());
        assert!(state.selected_match_id().is_none());
    }

    #[test]
    fn test_select_and_resolve_match() {
        let mut state = AppState::new();
        let m = make_match("Quinta");
        let id = m.id.clone();
        state.add_match(m);

        state.select_match(id.clone());
        assert_eq!(state.selected_match().unwrap().id, id);

        state.clear_selection();
        assert!(state.selected_match().is_none());
    }

    #[test]
    fn test_matches_played_by_filters_on_email() {
        let mut state = AppState::new();
        let mut a = make_match("A");
        a.confirm(ConfirmedPlayer {
            name: "Maria".to_string(),
            email: "maria@x.com".to_string(),
            position: None,
        })
        .unwrap();
        state.add_match(a);
        state.add_match(make_match("B"));

        let played: Vec<_> = state.matches_played_by("maria@x.com").collect();
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].name, "A");
        assert_eq!(state.matches_played_by("x@x.com").count(), 0);
    }

    #[test]
    fn test_logout_clears_user_only() {
        let mut state = AppState::new();
        state.set_user(User::new("Maria", "maria@x.com", "X"));
        state.add_match(make_match("A"));
        state.clear_user();
        assert!(!state.is_authenticated());
        assert_eq!(state.matches().len(), 1);
    }
}
