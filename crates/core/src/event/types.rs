use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::event::raw::parse_anchor_date;
use crate::recurrence::Recurrence;

/// A normalized calendar event.
///
/// Identity fields (`id`, `calendar_id`, `uid`) are opaque identifiers
/// issued by the persistence layer and passed through untouched. The anchor
/// date is `None` when the raw value failed to parse; such an event is kept
/// but never occurs on any day. Start and end times stay in their textual
/// `"h[:mm] am/pm"` form since layout resolves them lazily; an empty
/// `end_time` marks a point-in-time event with no duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub calendar_id: String,
    pub uid: String,
    /// Anchor date of the first occurrence; `None` if unparseable.
    pub date: Option<NaiveDate>,
    pub start_time: String,
    pub end_time: String,
    pub all_day: bool,
    pub repeat: Recurrence,
}

impl Event {
    /// Creates a one-time timed event, normalizing the raw anchor date.
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: &str) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            calendar_id: String::new(),
            uid: String::new(),
            date: parse_anchor_date(date),
            start_time: String::new(),
            end_time: String::new(),
            all_day: false,
            repeat: Recurrence::None,
        }
    }

    /// Sets the start and end times.
    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    /// Sets the start time only, leaving the event without a duration.
    pub fn with_start_time(mut self, start: impl Into<String>) -> Self {
        self.start_time = start.into();
        self
    }

    /// Sets the recurrence rule from its textual form, resolved against the
    /// anchor date. Without a valid anchor the event stays one-time.
    pub fn with_repeat(mut self, repeat: &str) -> Self {
        self.repeat = match self.date {
            Some(anchor) => Recurrence::parse(repeat, anchor),
            None => Recurrence::None,
        };
        self
    }

    /// Sets an already-constructed recurrence rule.
    pub fn with_rule(mut self, rule: Recurrence) -> Self {
        self.repeat = rule;
        self
    }

    /// Marks the event as all-day. Its times are then ignored by layout.
    pub fn as_all_day(mut self) -> Self {
        self.all_day = true;
        self
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the calendar this event belongs to.
    pub fn with_calendar_id(mut self, calendar_id: impl Into<String>) -> Self {
        self.calendar_id = calendar_id.into();
        self
    }

    /// Sets the owning user.
    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = uid.into();
        self
    }

    /// Returns true if the event carries an end time.
    pub fn has_end_time(&self) -> bool {
        !self.end_time.is_empty()
    }
}
