mod matcher;
mod rule;

pub use matcher::{occurs_on_day, occurring_on_day};
pub use rule::Recurrence;
