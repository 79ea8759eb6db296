//! Application layer for Pelada.
//!
//! This crate provides the [`App`] facade that coordinates the domain and
//! infrastructure layers: one method per user interaction, plus the
//! localized feedback text the rendering shell shows for each outcome.

pub mod app;
pub mod feedback;

pub use app::{App, ChatSendOutcome, FilterControl, SocialProvider};
