use chrono::{Datelike, NaiveDate};

use crate::event::Event;

use super::Recurrence;

/// Decides whether an event occurs on the given calendar day.
///
/// An event with a missing or unparseable anchor date never occurs. The
/// anchor date itself always matches, whatever the recurrence rule says.
/// Past that, the anchor must be on or before the target day and the rule
/// decides. Monthly rules match on the exact day-of-month, so an event
/// anchored on the 31st is skipped in shorter months rather than clamped.
/// All-day and timed events evaluate identically.
pub fn occurs_on_day(event: &Event, day: NaiveDate) -> bool {
    let Some(anchor) = event.date else {
        return false;
    };

    if anchor == day {
        return true;
    }
    if anchor > day {
        return false;
    }

    match event.repeat {
        Recurrence::Daily => true,
        Recurrence::Weekly { weekday } => day.weekday() == weekday,
        Recurrence::Monthly => day.day() == anchor.day(),
        Recurrence::Annually { month, day: day_of_month } => {
            day.month() == month && day.day() == day_of_month
        }
        Recurrence::None => false,
    }
}

/// Filters a collection down to the instances occurring on the given day,
/// preserving input order.
pub fn occurring_on_day<'a>(events: &'a [Event], day: NaiveDate) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| occurs_on_day(event, day))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn repeating(anchor: &str, repeat: &str) -> Event {
        Event::new("1", "Test", anchor).with_repeat(repeat)
    }

    #[test]
    fn test_daily_event_not_shown_before_anchor() {
        let event = repeating("2025-05-20", "Daily");
        assert!(!occurs_on_day(&event, make_date(2025, 5, 19)));
    }

    #[test]
    fn test_daily_event_shown_from_anchor_onward() {
        let event = repeating("2025-05-20", "Daily");
        assert!(occurs_on_day(&event, make_date(2025, 5, 20)));
        assert!(occurs_on_day(&event, make_date(2025, 5, 22)));
    }

    #[test]
    fn test_weekly_event_matches_anchor_weekday() {
        // 2025-05-20 is a Tuesday.
        let event = repeating("2025-05-20", "Weekly on Tuesday");
        assert!(occurs_on_day(&event, make_date(2025, 5, 20)));
        assert!(occurs_on_day(&event, make_date(2025, 5, 27)));
        assert!(!occurs_on_day(&event, make_date(2025, 5, 28)));
    }

    #[test]
    fn test_weekly_event_ignores_mislabelled_weekday() {
        // 2025-07-10 is a Thursday; the rule text claims Friday.
        let event = repeating("2025-07-10", "Weekly on Friday");
        assert!(occurs_on_day(&event, make_date(2025, 7, 10)));
        assert!(occurs_on_day(&event, make_date(2025, 7, 17)));
        assert!(!occurs_on_day(&event, make_date(2025, 7, 11)));
    }

    #[test]
    fn test_monthly_event_matches_day_of_month() {
        let event = repeating("2025-05-20", "Monthly");
        assert!(occurs_on_day(&event, make_date(2025, 6, 20)));
        assert!(!occurs_on_day(&event, make_date(2025, 6, 19)));
    }

    #[test]
    fn test_monthly_event_skips_short_months() {
        let event = repeating("2025-01-31", "Monthly");
        assert!(!occurs_on_day(&event, make_date(2025, 2, 28)));
        assert!(occurs_on_day(&event, make_date(2025, 3, 31)));
    }

    #[test]
    fn test_annual_event_matches_month_and_day() {
        let event = repeating("2025-05-20", "Annually on May 20");
        assert!(occurs_on_day(&event, make_date(2026, 5, 20)));
        assert!(!occurs_on_day(&event, make_date(2026, 5, 21)));
    }

    #[test]
    fn test_one_time_event_matches_only_anchor() {
        let event = repeating("2025-07-15", "");
        assert!(occurs_on_day(&event, make_date(2025, 7, 15)));
        assert!(!occurs_on_day(&event, make_date(2025, 7, 14)));
        assert!(!occurs_on_day(&event, make_date(2025, 7, 16)));
    }

    #[test]
    fn test_anchor_date_always_matches_regardless_of_rule() {
        for repeat in ["", "Daily", "Weekly on Tuesday", "Monthly", "Annually on May 20"] {
            let event = repeating("2025-05-20", repeat);
            assert!(occurs_on_day(&event, make_date(2025, 5, 20)));
        }
    }

    #[test]
    fn test_all_day_flag_has_no_effect() {
        let timed = repeating("2025-08-10", "Daily");
        let all_day = repeating("2025-08-10", "Daily").as_all_day();
        assert!(occurs_on_day(&timed, make_date(2025, 8, 12)));
        assert!(occurs_on_day(&all_day, make_date(2025, 8, 12)));
    }

    #[test]
    fn test_invalid_anchor_date_never_occurs() {
        let event = repeating("invalid-date", "Daily");
        assert!(!occurs_on_day(&event, make_date(2025, 5, 20)));
    }

    #[test]
    fn test_occurring_on_day_preserves_input_order() {
        let events = vec![
            Event::new("standup", "Standup", "2025-05-20").with_repeat("Daily"),
            Event::new("offsite", "Offsite", "2025-05-25"),
            Event::new("review", "Review", "2025-05-01").with_repeat("Daily"),
        ];
        let occurring = occurring_on_day(&events, make_date(2025, 5, 21));
        let ids: Vec<&str> = occurring.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["standup", "review"]);
    }
}
