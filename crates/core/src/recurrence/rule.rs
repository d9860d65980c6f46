use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// How an event repeats after its anchor date.
///
/// Built once at the ingestion boundary from the free-text `repeat` field.
/// The weekday of a `Weekly` rule and the month/day of an `Annually` rule
/// are captured from the anchor date itself; any weekday or month name
/// embedded in the source text is display-only and never trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recurrence {
    /// One-time event; occurs only on its anchor date.
    None,
    /// Occurs every day on or after the anchor date.
    Daily,
    /// Occurs every week on the anchor's weekday.
    Weekly { weekday: Weekday },
    /// Occurs every month on the anchor's day-of-month.
    Monthly,
    /// Occurs every year on the anchor's month and day.
    Annually { month: u32, day: u32 },
}

impl Recurrence {
    /// Parses the textual `repeat` field against the event's anchor date.
    ///
    /// Recognized forms: `"Daily"`, `"Weekly on ..."`, `"Monthly"`,
    /// `"Annually on ..."`. Anything else (including the empty string) is a
    /// one-time event.
    pub fn parse(repeat: &str, anchor: NaiveDate) -> Self {
        if repeat == "Daily" {
            Recurrence::Daily
        } else if repeat.starts_with("Weekly on") {
            Recurrence::Weekly {
                weekday: anchor.weekday(),
            }
        } else if repeat == "Monthly" {
            Recurrence::Monthly
        } else if repeat.starts_with("Annually on") {
            Recurrence::Annually {
                month: anchor.month(),
                day: anchor.day(),
            }
        } else {
            Recurrence::None
        }
    }

    /// Returns true for one-time events.
    pub fn is_none(&self) -> bool {
        matches!(self, Recurrence::None)
    }
}

impl Default for Recurrence {
    fn default() -> Self {
        Recurrence::None
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

impl fmt::Display for Recurrence {
    /// Renders the canonical wire form, e.g. `"Weekly on Tuesday"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recurrence::None => Ok(()),
            Recurrence::Daily => write!(f, "Daily"),
            Recurrence::Weekly { weekday } => write!(f, "Weekly on {}", weekday_name(*weekday)),
            Recurrence::Monthly => write!(f, "Monthly"),
            Recurrence::Annually { month, day } => {
                write!(f, "Annually on {} {}", month_name(*month), day)
            }
        }
    }
}
