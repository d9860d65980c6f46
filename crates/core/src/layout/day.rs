use tracing::trace;

use crate::event::Event;
use crate::time::parse_time_to_minutes;

use super::position::calc_position;
use super::strategy::{assign_column, min_height, sorted_by_start, LayoutStrategy, PositionedEvent};

/// Day-view packing: overlapping events are grouped into maximal overlap
/// windows, packed greedily into columns per window, then relabelled within
/// each window by descending end time so the longest-running event sits in
/// the leftmost column.
pub struct DayLayout;

impl LayoutStrategy for DayLayout {
    fn layout(&self, events: &[Event], cell_height: f64) -> Vec<PositionedEvent> {
        compute_day_layout(events, cell_height)
    }
}

struct Placed<'a> {
    event: &'a Event,
    top: f64,
    height: f64,
    end_min: u32,
}

/// Computes the day-view geometry for one day's timed events.
///
/// Output is sorted ascending by start minute. Within one overlap window
/// every event shares the same `columns` count; events from different
/// windows are independent. Heights are floored but never trimmed, so boxes
/// in the same column may visually extend past a later event's top edge.
pub fn compute_day_layout(events: &[Event], cell_height: f64) -> Vec<PositionedEvent> {
    let sorted = sorted_by_start(events);

    // Partition into maximal overlap windows: a new window opens once an
    // event starts at or after everything seen so far has ended.
    let mut windows: Vec<Vec<&Event>> = Vec::new();
    let mut current: Vec<&Event> = Vec::new();
    let mut window_end = 0;

    for event in sorted {
        let start_min = parse_time_to_minutes(&event.start_time);
        let end_min = parse_time_to_minutes(&event.end_time);

        if current.is_empty() || start_min < window_end {
            current.push(event);
            window_end = window_end.max(end_min);
        } else {
            windows.push(std::mem::take(&mut current));
            current.push(event);
            window_end = end_min;
        }
    }
    if !current.is_empty() {
        windows.push(current);
    }

    trace!(events = events.len(), windows = windows.len(), "computed day overlap windows");

    let mut result = Vec::with_capacity(events.len());

    for window in windows {
        let mut column_end_minutes: Vec<u32> = Vec::new();
        let mut placed: Vec<Placed> = Vec::with_capacity(window.len());

        for event in window {
            let start_min = parse_time_to_minutes(&event.start_time);
            let end_min = parse_time_to_minutes(&event.end_time);
            assign_column(&mut column_end_minutes, start_min, end_min);

            let position = calc_position(start_min, end_min, cell_height);
            let height = position.height.max(min_height(event, cell_height));

            placed.push(Placed {
                event,
                top: position.top,
                height,
                end_min,
            });
        }

        let columns = column_end_minutes.len();

        // The packing column is only used for the column count; the visual
        // column index reflects end-time order, longest-running first.
        placed.sort_by(|a, b| b.end_min.cmp(&a.end_min));

        for (column, item) in placed.into_iter().enumerate() {
            result.push(PositionedEvent {
                event: item.event.clone(),
                top: item.top,
                height: item.height,
                column,
                columns,
            });
        }
    }

    result.sort_by_key(|positioned| positioned.start_minute());
    result
}
