//! Match creation request model.
//!
//! The original form parsed capacity and fee with no bound checking and let
//! `NaN`/empty values flow straight into the match record. Here validation is
//! total: every field is checked and rejected with a typed error before a
//! [`Match`] is constructed.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{PeladaError, Result};
use crate::matches::model::Match;

/// Raw input from the match-creation form, all fields as typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMatchRequest {
    /// Match title (required).
    pub name: String,
    /// Scheduled day, ISO `YYYY-MM-DD` (required).
    pub date: String,
    /// Kick-off time, `HH:MM` (required).
    pub time: String,
    /// Venue description (required).
    pub place: String,
    /// Player capacity as typed (required, integer ≥ 1).
    pub capacity: String,
    /// Field type from the selector (required).
    pub field_type: String,
    /// Optional per-player fee as typed.
    #[serde(default)]
    pub fee: String,
    /// Gender restriction from the selector (required).
    pub gender: String,
    /// Whether chat is enabled for the match thread.
    #[serde(default)]
    pub chat_enabled: bool,
}

impl CreateMatchRequest {
    /// Validates every field and builds the match, giving it a fresh
    /// time-based id and empty confirmed/chat lists.
    pub fn validate(&self) -> Result<Match> {
        let name = required_text("name", &self.name)?;
        let place = required_text("place", &self.place)?;
        let field_type = required_text("field_type", &self.field_type)?;
        let gender = required_text("gender", &self.gender)?;

        let date: NaiveDate = self.date.trim().parse().map_err(|_| {
            PeladaError::validation("date", format!("'{}' is not a valid YYYY-MM-DD date", self.date))
        })?;

        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(self.time.trim(), "%H:%M:%S"))
            .map_err(|_| {
                PeladaError::validation("time", format!("'{}' is not a valid HH:MM time", self.time))
            })?;

        let capacity: u32 = self.capacity.trim().parse().map_err(|_| {
            PeladaError::validation(
                "capacity",
                format!("'{}' is not a whole number", self.capacity),
            )
        })?;
        if capacity == 0 {
            return Err(PeladaError::validation(
                "capacity",
                "a match needs at least one slot",
            ));
        }

        let fee = match self.fee.trim() {
            "" => None,
            raw => {
                let value: f64 = raw.parse().map_err(|_| {
                    PeladaError::validation("fee", format!("'{raw}' is not a number"))
                })?;
                if !value.is_finite() || value < 0.0 {
                    return Err(PeladaError::validation(
                        "fee",
                        "fee must be a non-negative amount",
                    ));
                }
                Some(value)
            }
        };

        Ok(Match::new(
            name,
            date,
            time,
            place,
            capacity,
            field_type,
            fee,
            gender,
            self.chat_enabled,
        ))
    }
}

fn required_text(field: &'static str, raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PeladaError::validation(field, format!("{field} cannot be empty")));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateMatchRequest {
        CreateMatchRequest {
            name: "Pelada de quinta".to_string(),
            date: "2026-09-10".to_string(),
            time: "19:30".to_string(),
            place: "Arena Central".to_string(),
            capacity: "10".to_string(),
            field_type: "Society".to_string(),
            fee: "15.50".to_string(),
            gender: "Misto".to_string(),
            chat_enabled: true,
        }
    }

    #[test]
    fn test_valid_request_builds_match() {
        let m = valid_request().validate().unwrap();
        assert_eq!(m.name, "Pelada de quinta");
        assert_eq!(m.capacity, 10);
        assert_eq!(m.fee, Some(15.5));
        assert!(m.chat_enabled);
        assert!(m.confirmed_players().is_empty());
        assert!(m.chat_messages().is_empty());
    }

    #[test]
    fn test_empty_fee_means_no_fee() {
        let mut req = valid_request();
        req.fee = "  ".to_string();
        assert_eq!(req.validate().unwrap().fee, None);
    }

    #[test]
    fn test_rejects_malformed_capacity() {
        for raw in ["", "abc", "-3", "2.5"] {
            let mut req = valid_request();
            req.capacity = raw.to_string();
            let err = req.validate().unwrap_err();
            assert!(err.is_validation(), "capacity {raw:?} should be rejected");
        }
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let mut req = valid_request();
        req.capacity = "0".to_string();
        assert!(req.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_rejects_malformed_fee() {
        for raw in ["abc", "-1", "NaN", "inf"] {
            let mut req = valid_request();
            req.fee = raw.to_string();
            let err = req.validate().unwrap_err();
            assert!(err.is_validation(), "fee {raw:?} should be rejected");
        }
    }

    #[test]
    fn test_rejects_malformed_date_and_time() {
        let mut req = valid_request();
        req.date = "10/09/2026".to_string();
        assert!(req.validate().unwrap_err().is_validation());

        let mut req = valid_request();
        req.time = "7pm".to_string();
        assert!(req.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_rejects_blank_text_fields() {
        let mut req = valid_request();
        req.place = "   ".to_string();
        assert!(req.validate().unwrap_err().is_validation());
    }
}
