//! Per-day schedule assembly.
//!
//! This is the seam the view layer calls: given the visible events and a
//! date (or the seven dates of a week), resolve which instances occur and
//! hand back render-ready geometry for the timed ones. All-day instances
//! are returned as a plain list since they render as a stack above the
//! grid, not inside it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::event::Event;
use crate::layout::{compute_day_layout, compute_week_layout, PositionedEvent};
use crate::recurrence::occurs_on_day;

/// Everything a renderer needs for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub date: NaiveDate,
    /// All-day instances, in input order.
    pub all_day: Vec<Event>,
    /// Timed instances with resolved geometry.
    pub timed: Vec<PositionedEvent>,
}

impl DaySchedule {
    /// Returns true if nothing occurs on this day.
    pub fn is_empty(&self) -> bool {
        self.all_day.is_empty() && self.timed.is_empty()
    }
}

fn occurring(events: &[Event], date: NaiveDate) -> (Vec<Event>, Vec<Event>) {
    events
        .iter()
        .filter(|event| occurs_on_day(event, date))
        .cloned()
        .partition(|event| event.all_day)
}

/// Builds the day-view schedule for a single date.
pub fn build_day_schedule(date: NaiveDate, events: &[Event], cell_height: f64) -> DaySchedule {
    let (all_day, timed) = occurring(events, date);
    trace!(%date, all_day = all_day.len(), timed = timed.len(), "assembled day schedule");

    DaySchedule {
        date,
        all_day,
        timed: compute_day_layout(&timed, cell_height),
    }
}

/// Builds the week-view schedule, one day column per date.
///
/// Each column is laid out independently with the week strategy; dates are
/// processed in the order given (normally the seven days of the week).
pub fn build_week_schedule(
    dates: &[NaiveDate],
    events: &[Event],
    cell_height: f64,
) -> Vec<DaySchedule> {
    dates
        .iter()
        .map(|&date| {
            let (all_day, timed) = occurring(events, date);
            DaySchedule {
                date,
                all_day,
                timed: compute_week_layout(&timed, cell_height),
            }
        })
        .collect()
}
