use crate::time::{HOURS_IN_DAY, MINUTES_IN_DAY};

/// Raw pixel geometry of a time interval within the day grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub top: f64,
    pub height: f64,
}

/// Maps a `[start_min, end_min)` interval onto a pixel column where each of
/// the 24 hour rows is `cell_height` pixels tall.
///
/// The mapping is purely linear: a full day (`0..1440`) spans exactly
/// `24 * cell_height` pixels. A zero or inverted interval produces a zero or
/// negative height; the layout engines floor it to a visible minimum.
pub fn calc_position(start_min: u32, end_min: u32, cell_height: f64) -> Position {
    let total_minutes = f64::from(MINUTES_IN_DAY);
    let total_height = cell_height * f64::from(HOURS_IN_DAY);

    let top = f64::from(start_min) / total_minutes * total_height;
    let height = (f64::from(end_min) - f64::from(start_min)) / total_minutes * total_height;

    Position { top, height }
}
