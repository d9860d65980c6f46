mod day;
mod position;
mod strategy;
mod week;

pub use day::{compute_day_layout, DayLayout};
pub use position::{calc_position, Position};
pub use strategy::{LayoutStrategy, PositionedEvent};
pub use week::{compute_week_layout, WeekLayout};
