//! The raw wire shape of an event and its one-time normalization.
//!
//! Persistence documents arrive with every field as free text; anything the
//! engine relies on (anchor date, recurrence rule) is resolved here, once,
//! so the rest of the crate works with typed values. Normalization never
//! fails: bad fields degrade to inert defaults instead.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::types::Event;
use crate::recurrence::Recurrence;

/// An event exactly as the persistence layer hands it over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub calendar_id: String,
    #[serde(default)]
    pub uid: String,
    /// Anchor date as an ISO date or datetime string.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub repeat: String,
}

/// Normalizes a raw anchor date to a calendar date, dropping time-of-day.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 datetimes, and bare
/// `YYYY-MM-DDTHH:MM:SS` timestamps. Returns `None` for anything else.
pub fn parse_anchor_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
                .ok()
                .map(|dt| dt.date())
        })
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        let date = parse_anchor_date(&raw.date);
        let repeat = match date {
            Some(anchor) => Recurrence::parse(&raw.repeat, anchor),
            None => Recurrence::None,
        };

        Event {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            calendar_id: raw.calendar_id,
            uid: raw.uid,
            date,
            start_time: raw.start_time,
            end_time: raw.end_time,
            all_day: raw.all_day,
            repeat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn test_parse_anchor_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2025, 5, 20);
        assert_eq!(parse_anchor_date("2025-05-20"), expected);
        assert_eq!(parse_anchor_date(" 2025-05-20 "), expected);
        assert_eq!(parse_anchor_date("2025-05-20T10:30:00Z"), expected);
        assert_eq!(parse_anchor_date("2025-05-20T10:30:00+02:00"), expected);
        assert_eq!(parse_anchor_date("2025-05-20T10:30:00"), expected);
    }

    #[test]
    fn test_parse_anchor_date_rejects_garbage() {
        assert_eq!(parse_anchor_date(""), None);
        assert_eq!(parse_anchor_date("invalid-date"), None);
        assert_eq!(parse_anchor_date("2025-13-40"), None);
        assert_eq!(parse_anchor_date("20/05/2025"), None);
    }

    #[test]
    fn test_normalization_resolves_recurrence_once() {
        let raw = RawEvent {
            id: "ev-1".into(),
            title: "Retro".into(),
            calendar_id: "cal-1".into(),
            date: "2025-07-10".into(), // Thursday
            start_time: "3:00 pm".into(),
            end_time: "4:00 pm".into(),
            repeat: "Weekly on Friday".into(),
            ..RawEvent::default()
        };

        let event = Event::from(raw);
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 7, 10));
        assert_eq!(
            event.repeat,
            Recurrence::Weekly {
                weekday: Weekday::Thu
            }
        );
    }

    #[test]
    fn test_normalization_tolerates_bad_fields() {
        let raw = RawEvent {
            id: "ev-2".into(),
            date: "not a date".into(),
            repeat: "Daily".into(),
            ..RawEvent::default()
        };

        let event = Event::from(raw);
        assert_eq!(event.date, None);
        assert_eq!(event.repeat, Recurrence::None);
    }

    #[test]
    fn test_wire_contract_is_camel_case_with_defaults() {
        let json = r#"{
            "id": "ev-3",
            "title": "Lunch",
            "calendarId": "cal-2",
            "date": "2025-06-04",
            "startTime": "12:00 pm",
            "allDay": false
        }"#;

        let raw: RawEvent = serde_json::from_str(json).unwrap();
        assert_eq!(raw.calendar_id, "cal-2");
        assert_eq!(raw.start_time, "12:00 pm");
        assert_eq!(raw.end_time, "");
        assert_eq!(raw.repeat, "");

        let event = Event::from(raw);
        assert!(!event.has_end_time());
        assert_eq!(event.repeat, Recurrence::None);
    }
}
