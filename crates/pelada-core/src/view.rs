//! View router.
//!
//! The app has four fixed screens and exactly one is current at any time.
//! There is no history stack; navigation is a single in-place assignment.

use serde::{Deserialize, Serialize};
use strum::Display;

/// The four screens of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Match list and search/filter controls.
    Home,
    /// Login form.
    Auth,
    /// Profile and stats.
    Profile,
    /// Single match: info, players, chat.
    MatchDetail,
}

/// Keeps the invariant that exactly one view is current.
#[derive(Debug, Clone)]
pub struct ViewRouter {
    current: View,
}

impl ViewRouter {
    /// Starts on the home screen.
    pub fn new() -> Self {
        Self {
            current: View::Home,
        }
    }

    /// The currently visible view.
    pub fn current(&self) -> View {
        self.current
    }

    /// Makes `view` the current one, hiding whatever was shown before.
    pub fn show(&mut self, view: View) {
        if self.current != view {
            tracing::debug!("view transition: {} -> {}", self.current, view);
        }
        self.current = view;
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_home() {
        assert_eq!(ViewRouter::new().current(), View::Home);
    }

    #[test]
    fn test_show_replaces_current_view() {
        let mut router = ViewRouter::new();
        router.show(View::Auth);
        assert_eq!(router.current(), View::Auth);
        router.show(View::MatchDetail);
        assert_eq!(router.current(), View::MatchDetail);
        router.show(View::Home);
        assert_eq!(router.current(), View::Home);
    }
}
