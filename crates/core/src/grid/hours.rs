use crate::time::{format_minutes, HOURS_IN_DAY, MINUTES_IN_DAY, MINUTES_IN_HOUR};

/// Returns the 24 hour-row labels of the time grid: `"12 am"` through
/// `"11 pm"`.
pub fn hour_labels() -> Vec<String> {
    (0..HOURS_IN_DAY)
        .map(|hour| {
            let with_minutes = format_minutes(hour * MINUTES_IN_HOUR);
            // Hour rows drop the ":00" that picker options keep.
            match with_minutes.split_once(':') {
                Some((hour_part, rest)) => {
                    let period = &rest[2..];
                    format!("{hour_part}{period}")
                }
                None => with_minutes,
            }
        })
        .collect()
}

/// Returns the time-picker options for a full day at the given step, as
/// `"h:mm am"` strings. A zero step falls back to 15 minutes.
pub fn time_options(step_minutes: u32) -> Vec<String> {
    let step = if step_minutes == 0 { 15 } else { step_minutes };
    (0..MINUTES_IN_DAY)
        .step_by(step as usize)
        .map(format_minutes)
        .collect()
}
