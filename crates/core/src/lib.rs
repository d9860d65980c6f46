//! Event occurrence and layout engine for the timegrid calendar.
//!
//! Everything here is a pure, synchronous function over plain data: the
//! view layer hands in events and dates and gets back which instances occur
//! on which days and where their boxes sit on the day or week grid.
//! Malformed input never panics or errors; it degrades to a defined default
//! so a broken event renders as a degenerate box instead of taking the view
//! down.

pub mod event;
pub mod grid;
pub mod layout;
pub mod recurrence;
pub mod schedule;
pub mod time;

pub use event::{filter_events_by_calendar, validate_event, Event, EventError, RawEvent};
pub use layout::{
    calc_position, compute_day_layout, compute_week_layout, DayLayout, LayoutStrategy,
    PositionedEvent, WeekLayout,
};
pub use recurrence::{occurs_on_day, Recurrence};
pub use schedule::{build_day_schedule, build_week_schedule, DaySchedule};
pub use time::{parse_time, parse_time_to_minutes};
