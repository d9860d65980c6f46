mod error;
mod operations;
mod raw;
mod types;

pub use error::EventError;
pub use operations::{filter_events_by_calendar, validate_event};
pub use raw::{parse_anchor_date, RawEvent};
pub use types::Event;
