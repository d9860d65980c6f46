use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One header cell of the week grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDay {
    pub date: NaiveDate,
    pub day_of_month: u32,
    /// Short uppercase weekday name, e.g. `"WED"`.
    pub label: String,
    pub is_today: bool,
}

fn short_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}

/// Returns the seven days of the week containing `date`, starting on
/// `week_start`. `today` is supplied by the caller so the result never
/// depends on the wall clock.
pub fn week_days(date: NaiveDate, week_start: Weekday, today: NaiveDate) -> Vec<WeekDay> {
    let offset = (7 + date.weekday().num_days_from_sunday()
        - week_start.num_days_from_sunday())
        % 7;
    let start = date - Duration::days(i64::from(offset));

    (0..7)
        .map(|index| {
            let day = start + Duration::days(index);
            WeekDay {
                date: day,
                day_of_month: day.day(),
                label: short_label(day.weekday()).to_string(),
                is_today: day == today,
            }
        })
        .collect()
}
