use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::time::parse_time_to_minutes;

/// An event together with its resolved on-screen geometry.
///
/// `top` and `height` are pixel offsets within the 24-row day grid.
/// `column` and `columns` place the event horizontally among the events it
/// overlaps with; renderers derive percentages via [`left_percent`] and
/// [`width_percent`].
///
/// [`left_percent`]: PositionedEvent::left_percent
/// [`width_percent`]: PositionedEvent::width_percent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedEvent {
    pub event: Event,
    pub top: f64,
    pub height: f64,
    pub column: usize,
    pub columns: usize,
}

impl PositionedEvent {
    /// Horizontal offset as a percentage of the day column width.
    pub fn left_percent(&self) -> f64 {
        self.column as f64 / self.columns as f64 * 100.0
    }

    /// Width as a percentage of the day column width.
    pub fn width_percent(&self) -> f64 {
        1.0 / self.columns as f64 * 100.0
    }

    /// Start of the event in minutes since midnight.
    pub fn start_minute(&self) -> u32 {
        parse_time_to_minutes(&self.event.start_time)
    }

    /// End of the event in minutes since midnight (`0` when absent).
    pub fn end_minute(&self) -> u32 {
        parse_time_to_minutes(&self.event.end_time)
    }
}

/// A column-packing strategy for the timed events of one day.
///
/// Day and week views pack overlapping events differently (per-window column
/// counts and end-time relabelling versus whole-day columns with height
/// trimming), so each view is a named strategy behind this interface.
pub trait LayoutStrategy {
    fn layout(&self, events: &[Event], cell_height: f64) -> Vec<PositionedEvent>;
}

/// Minimum visible height for an event box.
///
/// Events with an end time get half a cell so short meetings stay readable;
/// point-in-time events get a quarter cell marker.
pub(super) fn min_height(event: &Event, cell_height: f64) -> f64 {
    if event.has_end_time() {
        cell_height / 2.0
    } else {
        cell_height / 4.0
    }
}

/// Greedy column packing: reuses the lowest-indexed column that has ended by
/// `start_min`, opening a new one when every column is still busy. Returns
/// the assigned column and tracks the column's new end minute.
pub(super) fn assign_column(column_end_minutes: &mut Vec<u32>, start_min: u32, end_min: u32) -> usize {
    let column = match column_end_minutes
        .iter()
        .position(|&column_end| start_min >= column_end)
    {
        Some(column) => column,
        None => {
            column_end_minutes.push(0);
            column_end_minutes.len() - 1
        }
    };
    column_end_minutes[column] = end_min;
    column
}

/// Sorts event references by start minute, keeping input order for ties.
pub(super) fn sorted_by_start(events: &[Event]) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by_key(|event| parse_time_to_minutes(&event.start_time));
    sorted
}
