pub mod path;
pub mod table;
pub mod time;

pub use time::{duration_label, format_duration, parse_clock_time};
