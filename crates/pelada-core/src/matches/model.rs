//! Match domain model.
//!
//! A match is a scheduled pickup game with fixed capacity, a confirmed-player
//! list, and an optional chat thread. Matches live only in memory; there is
//! no delete path and no durable storage for them.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PeladaError, Result};
use crate::user::User;

static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Unique match identifier.
///
/// A time-based token: epoch milliseconds plus a per-process counter, so two
/// matches created in the same millisecond still get distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchId(String);

impl MatchId {
    /// Generates a fresh id from the current time.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let seq = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("{millis}-{seq}"))
    }

    /// The id as a string token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MatchId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A slot reservation: a denormalized snapshot of the user at the moment of
/// confirmation, not a live reference. Later profile edits do not touch it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmedPlayer {
    /// Display name at confirmation time.
    pub name: String,
    /// Identity key; at most one entry per email in a match.
    pub email: String,
    /// Favorite position at confirmation time, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
}

impl ConfirmedPlayer {
    /// Snapshots a user into a confirmed-player entry.
    pub fn snapshot_of(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            position: user.favorite_position.clone(),
        }
    }
}

/// One chat line. Append-only, no timestamps, no editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author display name.
    pub author: String,
    /// Message body.
    pub text: String,
}

/// A scheduled pickup match.
///
/// Constructed only through [`CreateMatchRequest::validate`], so every field
/// a form could corrupt has already been checked. Mutation is limited to
/// [`Match::confirm`] and [`Match::append_chat`], which uphold the
/// capacity/uniqueness/chat-gating invariants.
///
/// [`CreateMatchRequest::validate`]: crate::matches::CreateMatchRequest::validate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Unique time-based id.
    pub id: MatchId,
    /// Match title.
    pub name: String,
    /// Scheduled day.
    pub date: NaiveDate,
    /// Kick-off time.
    pub time: NaiveTime,
    /// Venue description.
    pub place: String,
    /// Maximum number of confirmed players.
    pub capacity: u32,
    /// Field type as picked on the form (e.g. "Society", "Quadra").
    pub field_type: String,
    /// Optional per-player fee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee: Option<f64>,
    /// Gender restriction as picked on the form.
    pub gender: String,
    /// Whether the match thread accepts chat messages.
    pub chat_enabled: bool,
    /// Cover photo URL, if one was set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    confirmed: Vec<ConfirmedPlayer>,
    chat: Vec<ChatMessage>,
}

impl Match {
    pub(crate) fn new(
        name: String,
        date: NaiveDate,
        time: NaiveTime,
        place: String,
        capacity: u32,
        field_type: String,
        fee: Option<f64>,
        gender: String,
        chat_enabled: bool,
    ) -> Self {
        Self {
            id: MatchId::generate(),
            name,
            date,
            time,
            place,
            capacity,
            field_type,
            fee,
            gender,
            chat_enabled,
            photo_url: None,
            confirmed: Vec::new(),
            chat: Vec::new(),
        }
    }

    /// The confirmed players, in confirmation order.
    pub fn confirmed_players(&self) -> &[ConfirmedPlayer] {
        &self.confirmed
    }

    /// The chat log, in append order.
    pub fn chat_messages(&self) -> &[ChatMessage] {
        &self.chat
    }

    /// Remaining open slots.
    pub fn open_slots(&self) -> u32 {
        self.capacity.saturating_sub(self.confirmed.len() as u32)
    }

    /// Whether the match has reached capacity.
    pub fn is_full(&self) -> bool {
        self.confirmed.len() as u32 >= self.capacity
    }

    /// Whether this email already holds a slot.
    pub fn has_confirmed(&self, email: &str) -> bool {
        self.confirmed.iter().any(|p| p.email == email)
    }

    /// Reserves a slot for the player.
    ///
    /// Rejects a duplicate email before checking capacity, matching the
    /// original gate order, so a player who already holds a slot is told so
    /// even when the match is full.
    pub fn confirm(&mut self, player: ConfirmedPlayer) -> Result<()> {
        if self.has_confirmed(&player.email) {
            return Err(PeladaError::AlreadyConfirmed {
                email: player.email,
            });
        }
        if self.is_full() {
            return Err(PeladaError::MatchFull {
                capacity: self.capacity,
            });
        }
        self.confirmed.push(player);
        Ok(())
    }

    /// Appends a chat message. Fails when chat is disabled for this match;
    /// the log stays untouched in that case.
    pub fn append_chat(&mut self, message: ChatMessage) -> Result<()> {
        if !self.chat_enabled {
            return Err(PeladaError::ChatDisabled);
        }
        self.chat.push(message);
        Ok(())
    }
}
