use tracing::trace;

use crate::event::Event;
use crate::time::parse_time_to_minutes;

use super::position::calc_position;
use super::strategy::{
    assign_column, min_height, sorted_by_start, LayoutStrategy, PositionedEvent,
};

/// Week-view packing: one greedy column pass over the whole day column,
/// keeping the packing column as the visual column, followed by a trim pass
/// that cuts each box off where the next later-starting box begins.
pub struct WeekLayout;

impl LayoutStrategy for WeekLayout {
    fn layout(&self, events: &[Event], cell_height: f64) -> Vec<PositionedEvent> {
        compute_week_layout(events, cell_height)
    }
}

/// Computes the week-view geometry for one day column.
///
/// Unlike the day view there is no partitioning into overlap windows:
/// `columns` is the total column count used across the whole day. Output
/// order follows the internal processing order and is not a contract.
pub fn compute_week_layout(events: &[Event], cell_height: f64) -> Vec<PositionedEvent> {
    let sorted = sorted_by_start(events);

    let mut column_end_minutes: Vec<u32> = Vec::new();
    let mut positioned: Vec<PositionedEvent> = Vec::with_capacity(events.len());

    for event in sorted {
        let start_min = parse_time_to_minutes(&event.start_time);
        let end_min = parse_time_to_minutes(&event.end_time);
        let column = assign_column(&mut column_end_minutes, start_min, end_min);

        let position = calc_position(start_min, end_min, cell_height);
        let height = position.height.max(min_height(event, cell_height));

        positioned.push(PositionedEvent {
            event: event.clone(),
            top: position.top,
            height,
            column,
            // Filled in below once the whole column is packed.
            columns: 0,
        });
    }

    trim_to_next_start(&mut positioned);

    let columns = column_end_minutes.len();
    for item in &mut positioned {
        item.columns = columns;
    }

    trace!(events = events.len(), columns, "computed week day-column layout");

    positioned
}

/// Shrinks each box so it ends where the first strictly-later-starting box
/// begins, when the two would otherwise visually overlap. Only the first
/// later top is considered; boxes sharing the same top never trim each
/// other.
fn trim_to_next_start(positioned: &mut [PositionedEvent]) {
    let mut by_top: Vec<usize> = (0..positioned.len()).collect();
    by_top.sort_by(|&a, &b| positioned[a].top.total_cmp(&positioned[b].top));

    for i in 0..by_top.len() {
        let current = by_top[i];
        for &next in &by_top[i + 1..] {
            if positioned[next].top > positioned[current].top {
                let bottom = positioned[current].top + positioned[current].height;
                if bottom > positioned[next].top {
                    positioned[current].height = positioned[next].top - positioned[current].top;
                }
                break;
            }
        }
    }
}
