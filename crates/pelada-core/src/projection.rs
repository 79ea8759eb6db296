//! Pure state-to-viewmodel projections.
//!
//! Every function here turns a piece of [`AppState`] into a plain-data view
//! model the rendering shell can paint from, so view logic is testable
//! without a display surface. The shell fully replaces a container's content
//! from a view model on each call; nothing here touches the state.

use serde::{Deserialize, Serialize};

use crate::matches::Match;
use crate::state::AppState;
use crate::user::initial_of;

/// Fallback cover photo for matches created without one.
pub const DEFAULT_MATCH_PHOTO: &str =
    "https://images.unsplash.com/photo-1519680772-8b7b8d1cd9f3?q=80&w=1400&auto=format&fit=crop";

/// Shown in place of an unset position or rating.
const PLACEHOLDER: &str = "—";

/// Header navigation state: which of the two nav links is visible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderView {
    pub show_login: bool,
    pub show_profile: bool,
}

/// One card in the home match list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCard {
    pub id: String,
    pub name: String,
    /// `place • date time • Vagas: n` line under the title.
    pub meta_line: String,
    pub open_slots: u32,
}

/// The home screen: match cards plus the empty-state flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeView {
    pub cards: Vec<MatchCard>,
    pub show_empty_state: bool,
}

/// One entry in the detail view's player list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerCard {
    pub name: String,
    pub avatar_initial: char,
    /// Position, or `—` when the player never set one.
    pub position_label: String,
}

/// The chat panel: either a disabled notice or the message lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChatPanel {
    /// Chat was not enabled for this match; the input form is hidden.
    Disabled,
    /// Message lines in append order.
    Enabled { lines: Vec<ChatLine> },
}

/// One chat message line, `author: text`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatLine {
    pub author: String,
    pub text: String,
}

/// The match detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchDetailView {
    pub title: String,
    /// `date time` line.
    pub date_time_line: String,
    pub place: String,
    /// `field_type • gender` line.
    pub type_line: String,
    pub photo_url: String,
    pub players: Vec<PlayerCard>,
    pub chat: ChatPanel,
}

/// Profile stats derived from the in-memory match list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Count of matches whose confirmed list contains the user's email.
    pub matches_played: usize,
    pub goals: u32,
    /// Rating, or `—` when unset.
    pub rating_label: String,
}

/// The profile screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileView {
    pub name: String,
    pub avatar_initial: char,
    /// `Nível: {level}` line.
    pub level_line: String,
    /// `Posição favorita: {position}` line.
    pub position_line: String,
    pub photo_url: Option<String>,
    pub stats: ProfileStats,
    /// `{name} • {date} {time} • {place}` per match played, creation order.
    pub history_lines: Vec<String>,
}

/// Projects the header navigation state.
pub fn header_view(state: &AppState) -> HeaderView {
    let authenticated = state.is_authenticated();
    HeaderView {
        show_login: !authenticated,
        show_profile: authenticated,
    }
}

/// Projects the home screen match list.
pub fn home_view(state: &AppState) -> HomeView {
    let cards = state
        .matches()
        .iter()
        .map(|m| MatchCard {
            id: m.id.to_string(),
            name: m.name.clone(),
            meta_line: format!(
                "{} • {} {} • Vagas: {}",
                m.place,
                m.date.format("%Y-%m-%d"),
                m.time.format("%H:%M"),
                m.open_slots()
            ),
            open_slots: m.open_slots(),
        })
        .collect::<Vec<_>>();
    HomeView {
        show_empty_state: cards.is_empty(),
        cards,
    }
}

/// Projects one match into the detail screen.
pub fn match_detail_view(m: &Match) -> MatchDetailView {
    let players = m
        .confirmed_players()
        .iter()
        .map(|p| PlayerCard {
            name: p.name.clone(),
            avatar_initial: initial_of(&p.name),
            position_label: p
                .position
                .clone()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        })
        .collect();

    let chat = if m.chat_enabled {
        ChatPanel::Enabled {
            lines: m
                .chat_messages()
                .iter()
                .map(|msg| ChatLine {
                    author: msg.author.clone(),
                    text: msg.text.clone(),
                })
                .collect(),
        }
    } else {
        ChatPanel::Disabled
    };

    MatchDetailView {
        title: m.name.clone(),
        date_time_line: format!("{} {}", m.date.format("%Y-%m-%d"), m.time.format("%H:%M")),
        place: m.place.clone(),
        type_line: format!("{} • {}", m.field_type, m.gender),
        photo_url: m
            .photo_url
            .clone()
            .unwrap_or_else(|| DEFAULT_MATCH_PHOTO.to_string()),
        players,
        chat,
    }
}

/// Projects the profile screen. Returns `None` when logged out; the profile
/// view is unreachable in that case.
pub fn profile_view(state: &AppState) -> Option<ProfileView> {
    let user = state.user()?;

    let played: Vec<&Match> = state.matches_played_by(&user.email).collect();
    let history_lines = played
        .iter()
        .map(|m| {
            format!(
                "{} • {} {} • {}",
                m.name,
                m.date.format("%Y-%m-%d"),
                m.time.format("%H:%M"),
                m.place
            )
        })
        .collect();

    Some(ProfileView {
        name: user.name.clone(),
        avatar_initial: user.avatar_initial(),
        level_line: format!("Nível: {}", user.level),
        position_line: format!(
            "Posição favorita: {}",
            user.favorite_position.as_deref().unwrap_or(PLACEHOLDER)
        ),
        photo_url: user.photo_url.clone(),
        stats: ProfileStats {
            matches_played: played.len(),
            goals: user.goals,
            rating_label: user
                .rating
                .map(|r| format!("{r:.1}"))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        },
        history_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matches::{ChatMessage, ConfirmedPlayer, CreateMatchRequest};
    use crate::user::User;

    fn make_match(name: &str, capacity: &str, chat_enabled: bool) -> Match {
        CreateMatchRequest {
            name: name.to_string(),
            date: "2026-09-10".to_string(),
            time: "19:00".to_string(),
            place: "Arena Central".to_string(),
            capacity: capacity.to_string(),
            field_type: "Society".to_string(),
            fee: String::new(),
            gender: "Misto".to_string(),
            chat_enabled,
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_header_follows_auth_state() {
        let mut state = AppState::new();
        assert_eq!(
            header_view(&state),
            HeaderView {
                show_login: true,
                show_profile: false
            }
        );
        state.set_user(User::new("Maria", "maria@x.com", "X"));
        assert_eq!(
            header_view(&state),
            HeaderView {
                show_login: false,
                show_profile: true
            }
        );
    }

    #[test]
    fn test_home_view_empty_state() {
        let state = AppState::new();
        let home = home_view(&state);
        assert!(home.show_empty_state);
        assert!(home.cards.is_empty());
    }

    #[test]
    fn test_home_card_meta_line() {
        let mut state = AppState::new();
        let mut m = make_match("Quinta", "10", false);
        m.confirm(ConfirmedPlayer {
            name: "A".to_string(),
            email: "a@x.com".to_string(),
            position: None,
        })
        .unwrap();
        state.add_match(m);

        let home = home_view(&state);
        assert!(!home.show_empty_state);
        assert_eq!(
            home.cards[0].meta_line,
            "Arena Central • 2026-09-10 19:00 • Vagas: 9"
        );
    }

    #[test]
    fn test_detail_view_fallbacks() {
        let mut m = make_match("Quinta", "10", false);
        m.confirm(ConfirmedPlayer {
            name: "ana".to_string(),
            email: "ana@x.com".to_string(),
            position: None,
        })
        .unwrap();

        let detail = match_detail_view(&m);
        assert_eq!(detail.type_line, "Society • Misto");
        assert_eq!(detail.photo_url, DEFAULT_MATCH_PHOTO);
        assert_eq!(detail.players[0].avatar_initial, 'A');
        assert_eq!(detail.players[0].position_label, "—");
        assert_eq!(detail.chat, ChatPanel::Disabled);
    }

    #[test]
    fn test_player_initial_matches_user_avatar() {
        let mut m = make_match("Quinta", "10", false);
        for (name, email) in [("maria", "m@x.com"), ("", "x@x.com")] {
            m.confirm(ConfirmedPlayer {
                name: name.to_string(),
                email: email.to_string(),
                position: None,
            })
            .unwrap();
        }

        let detail = match_detail_view(&m);
        assert_eq!(detail.players[0].avatar_initial, 'M');
        // Same fallback as User::avatar_initial for a blank name.
        assert_eq!(detail.players[1].avatar_initial, '?');
    }

    #[test]
    fn test_detail_view_chat_lines() {
        let mut m = make_match("Quinta", "10", true);
        m.append_chat(ChatMessage {
            author: "Maria".to_string(),
            text: "bora".to_string(),
        })
        .unwrap();

        match match_detail_view(&m).chat {
            ChatPanel::Enabled { lines } => {
                assert_eq!(lines.len(), 1);
                assert_eq!(lines[0].author, "Maria");
            }
            ChatPanel::Disabled => panic!("chat should be enabled"),
        }
    }

    #[test]
    fn test_profile_view_requires_user() {
        assert!(profile_view(&AppState::new()).is_none());
    }

    #[test]
    fn test_profile_view_lines_and_stats() {
        let mut state = AppState::new();
        let mut user = User::new("Maria", "maria@x.com", "Intermediário");
        user.favorite_position = Some("Goleira".to_string());
        state.set_user(user);

        let mut m = make_match("Quinta", "10", false);
        m.confirm(ConfirmedPlayer {
            name: "Maria".to_string(),
            email: "maria@x.com".to_string(),
            position: Some("Goleira".to_string()),
        })
        .unwrap();
        state.add_match(m);
        state.add_match(make_match("Sábado", "8", false));

        let profile = profile_view(&state).unwrap();
        assert_eq!(profile.level_line, "Nível: Intermediário");
        assert_eq!(profile.position_line, "Posição favorita: Goleira");
        assert_eq!(profile.stats.matches_played, 1);
        assert_eq!(profile.stats.rating_label, "—");
        assert_eq!(
            profile.history_lines,
            vec!["Quinta • 2026-09-10 19:00 • Arena Central".to_string()]
        );
    }
}
