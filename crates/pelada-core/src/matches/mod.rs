//! Match domain module.
//!
//! # Module Structure
//!
//! - `model`: [`Match`], [`MatchId`], embedded [`ConfirmedPlayer`] and
//!   [`ChatMessage`] entries
//! - `request`: validated match-creation input

mod model;
mod request;

pub use model::{ChatMessage, ConfirmedPlayer, Match, MatchId};
pub use request::CreateMatchRequest;
