//! View scaffolding: the date cells, headers, and labels the month and week
//! grids are built from. Pure date arithmetic; "today" is always an
//! explicit parameter rather than read from the clock.

mod hours;
mod month;
mod week;

pub use hours::{hour_labels, time_options};
pub use month::{month_grid, MonthCell};
pub use week::{week_days, WeekDay};

use chrono::NaiveDate;

/// Formats a date as its `YYYY-MM-DD` grouping key.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
