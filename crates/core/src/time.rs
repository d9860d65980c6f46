//! Wall-clock time codec.
//!
//! Events carry their times as `"h[:mm] am/pm"` strings; the layout engines
//! work in minutes since midnight. Both directions live here.

/// Minutes in one hour.
pub const MINUTES_IN_HOUR: u32 = 60;
/// Hours in one day.
pub const HOURS_IN_DAY: u32 = 24;
/// Minutes in one day.
pub const MINUTES_IN_DAY: u32 = HOURS_IN_DAY * MINUTES_IN_HOUR;

/// Parses a `"h[:mm] am/pm"` time string into minutes since midnight.
///
/// The pattern is matched exactly: an hour from 1 to 12, optional two-digit
/// minutes after a colon, optional whitespace, and a case-insensitive
/// `am`/`pm` marker. Surrounding whitespace is ignored. `12 am` is midnight
/// and `12 pm` is noon. Anything else (24-hour strings like `"08:00"`,
/// out-of-range hours like `"13 pm"`) yields `None`.
pub fn parse_time(text: &str) -> Option<u32> {
    let normalized = text.trim();

    let hour_len = normalized.chars().take_while(|c| c.is_ascii_digit()).count();
    if hour_len == 0 || hour_len > 2 {
        return None;
    }
    let hour: u32 = normalized[..hour_len].parse().ok()?;
    if !(1..=12).contains(&hour) {
        return None;
    }
    let mut rest = &normalized[hour_len..];

    let minutes = if let Some(after_colon) = rest.strip_prefix(':') {
        let minute_digits = after_colon.get(..2).filter(|s| s.chars().all(|c| c.is_ascii_digit()))?;
        rest = &after_colon[2..];
        minute_digits.parse::<u32>().ok()?
    } else {
        0
    };

    let period = rest.trim_start();
    let hour = match period {
        p if p.eq_ignore_ascii_case("am") => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        p if p.eq_ignore_ascii_case("pm") => {
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        }
        _ => return None,
    };

    Some(hour * MINUTES_IN_HOUR + minutes)
}

/// Lenient form of [`parse_time`]: malformed or empty input maps to `0`
/// instead of an error, so layout never fails on dirty event data.
pub fn parse_time_to_minutes(text: &str) -> u32 {
    parse_time(text).unwrap_or(0)
}

/// Formats minutes since midnight as a `"h:mm am"` label.
///
/// Values are taken modulo one day, so `1440` wraps back to `"12:00 am"`.
pub fn format_minutes(minutes: u32) -> String {
    let minutes = minutes % MINUTES_IN_DAY;
    let hour24 = minutes / MINUTES_IN_HOUR;
    let minute = minutes % MINUTES_IN_HOUR;

    let period = if hour24 < 12 { "am" } else { "pm" };
    let hour = match hour24 % 12 {
        0 => 12,
        h => h,
    };

    format!("{hour}:{minute:02} {period}")
}
