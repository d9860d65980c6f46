use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCell {
    pub date: NaiveDate,
    /// True for the leading and trailing padding days that belong to the
    /// previous or next month.
    pub outside_month: bool,
}

/// Builds the Sunday-started month grid containing the given date.
///
/// The grid starts on the Sunday on or before the first of the month and is
/// padded to whole weeks, so its length is always a multiple of seven
/// (28 to 42 cells depending on the month).
pub fn month_grid(date: NaiveDate) -> Vec<MonthCell> {
    let month = date.month();
    // The first of a valid date's month always exists.
    let first_of_month = date - Duration::days(i64::from(date.day()) - 1);

    let lead_days = first_of_month.weekday().num_days_from_sunday();
    let grid_start = first_of_month - Duration::days(i64::from(lead_days));

    let days_in_month = days_in_month(date);
    let total_cells = (lead_days + days_in_month).div_ceil(7) * 7;

    (0..total_cells)
        .map(|offset| {
            let cell_date = grid_start + Duration::days(i64::from(offset));
            MonthCell {
                date: cell_date,
                outside_month: cell_date.month() != month,
            }
        })
        .collect()
}

fn days_in_month(date: NaiveDate) -> u32 {
    let (next_year, next_month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // The first of the next month always exists for a valid date.
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or(date);
    (first_of_next - Duration::days(1)).day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_grid_is_whole_weeks_starting_sunday() {
        // June 2025 starts on a Sunday and has 30 days: exactly 5 weeks.
        let grid = month_grid(make_date(2025, 6, 15));
        assert_eq!(grid.len(), 35);
        assert_eq!(grid[0].date, make_date(2025, 6, 1));
        assert!(!grid[0].outside_month);
        assert_eq!(grid[34].date, make_date(2025, 7, 5));
        assert!(grid[34].outside_month);
    }

    #[test]
    fn test_grid_pads_leading_days_from_previous_month() {
        // August 2025 starts on a Friday.
        let grid = month_grid(make_date(2025, 8, 10));
        assert_eq!(grid[0].date, make_date(2025, 7, 27));
        assert!(grid[0].outside_month);
        assert_eq!(grid[5].date, make_date(2025, 8, 1));
        assert!(!grid[5].outside_month);
        assert_eq!(grid.len() % 7, 0);
    }

    #[test]
    fn test_grid_handles_february() {
        // February 2026 has 28 days and starts on a Sunday: 4 exact weeks.
        let grid = month_grid(make_date(2026, 2, 14));
        assert_eq!(grid.len(), 28);
        assert!(grid.iter().all(|cell| !cell.outside_month));
    }

    #[test]
    fn test_grid_handles_december_year_boundary() {
        let grid = month_grid(make_date(2025, 12, 25));
        let last = grid.last().unwrap();
        assert!(last.date >= make_date(2025, 12, 31));
        assert_eq!(grid.len() % 7, 0);
        assert_eq!(
            grid.iter().filter(|cell| !cell.outside_month).count(),
            31
        );
    }
}
