//! Event Model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::require;
use crate::error::{AppError, ErrorCode};

/// Event format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Webinar,
    Workshop,
    Conference,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Webinar => "webinar",
            Self::Workshop => "workshop",
            Self::Conference => "conference",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "webinar" => Some(Self::Webinar),
            "workshop" => Some(Self::Workshop),
            "conference" => Some(Self::Conference),
            _ => None,
        }
    }
}

/// Event schedule status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
        }
    }

    pub fn from_db(s: &str) -> Option<Self> {
        match s {
            "upcoming" => Some(Self::Upcoming),
            "ongoing" => Some(Self::Ongoing),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// Event entity
///
/// `date` is `YYYY-MM-DD` and `time` is `HH:MM`, both as entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub status: EventStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Event {
    /// Still ahead of `today` and not marked completed
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.status == EventStatus::Upcoming
            && NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_ok_and(|d| d >= today)
    }
}

/// Create/update event payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventInput {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(rename = "type", default)]
    pub event_type: EventType,
    #[serde(default)]
    pub status: EventStatus,
}

impl EventInput {
    pub fn validate(&self) -> Result<(), AppError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("date", &self.date)?;
        require("time", &self.time)?;
        require("location", &self.location)?;

        if NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").is_err() {
            return Err(
                AppError::with_message(ErrorCode::InvalidFormat, "Date must be YYYY-MM-DD")
                    .with_detail("field", "date"),
            );
        }
        if NaiveTime::parse_from_str(self.time.trim(), "%H:%M").is_err() {
            return Err(
                AppError::with_message(ErrorCode::InvalidFormat, "Time must be HH:MM")
                    .with_detail("field", "time"),
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> EventInput {
        EventInput {
            title: "Cloud Summit".into(),
            description: "Annual gathering".into(),
            date: "2026-11-02".into(),
            time: "09:30".into(),
            location: "Lisbon".into(),
            event_type: EventType::Conference,
            status: EventStatus::Upcoming,
        }
    }

    #[test]
    fn type_and_status_default() {
        let parsed: EventInput = serde_json::from_str(
            r#"{"title":"t","description":"d","date":"2026-01-01","time":"10:00","location":"x"}"#,
        )
        .unwrap();
        assert_eq!(parsed.event_type, EventType::Webinar);
        assert_eq!(parsed.status, EventStatus::Upcoming);
    }

    #[test]
    fn rejects_malformed_date_and_time() {
        let mut e = input();
        e.date = "02/11/2026".into();
        assert_eq!(e.validate().unwrap_err().code, ErrorCode::InvalidFormat);

        let mut e = input();
        e.time = "9.30am".into();
        assert_eq!(e.validate().unwrap_err().code, ErrorCode::InvalidFormat);

        assert!(input().validate().is_ok());
    }

    #[test]
    fn upcoming_requires_future_date_and_status() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        let mut event = Event {
            id: 1,
            title: "t".into(),
            description: "d".into(),
            date: "2026-10-18".into(),
            time: "10:00".into(),
            location: "x".into(),
            event_type: EventType::Workshop,
            status: EventStatus::Upcoming,
            created_at: 0,
            updated_at: 0,
        };
        assert!(event.is_upcoming(today));

        event.date = "2026-10-17".into();
        assert!(!event.is_upcoming(today));

        event.date = "2027-01-01".into();
        event.status = EventStatus::Completed;
        assert!(!event.is_upcoming(today));
    }

    #[test]
    fn type_serializes_under_type_key() {
        let json = serde_json::to_value(input()).unwrap();
        assert_eq!(json["type"], "conference");
        assert_eq!(json["status"], "upcoming");
    }
}
