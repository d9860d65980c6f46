use super::error::EventError;
use super::types::Event;
use crate::time::parse_time;

/// Filters events down to those belonging to the given visible calendars.
pub fn filter_events_by_calendar<'a>(
    events: &'a [Event],
    calendar_ids: &[&str],
) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| calendar_ids.contains(&event.calendar_id.as_str()))
        .collect()
}

/// Validates an event before creation or update.
///
/// Time checks only apply to timed events; all-day events ignore their time
/// fields entirely. An empty time string is legal (no start, or a
/// point-in-time event with no end).
pub fn validate_event(event: &Event) -> Result<(), EventError> {
    if event.title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if event.title.len() > 200 {
        return Err(EventError::TitleTooLong);
    }
    if event.date.is_none() {
        return Err(EventError::InvalidAnchorDate);
    }

    if event.all_day {
        return Ok(());
    }

    let start = match event.start_time.as_str() {
        "" => None,
        text => Some(parse_time(text).ok_or_else(|| EventError::UnrecognizedTime(text.to_string()))?),
    };
    let end = match event.end_time.as_str() {
        "" => None,
        text => Some(parse_time(text).ok_or_else(|| EventError::UnrecognizedTime(text.to_string()))?),
    };

    if let (Some(start), Some(end)) = (start, end) {
        if end <= start {
            return Err(EventError::InvalidTimeRange);
        }
    }

    Ok(())
}
