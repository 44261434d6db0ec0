//! Statistics and moving-average trend detection.
//!
//! Both algorithms are pure functions of their numeric input: callers parse observation
//! values first (see `ObservationSet::numeric_values`) and hand over only the numbers.

mod stats;
mod trend;

pub use stats::statistics;
pub use trend::{DEFAULT_TREND_WINDOW, detect_trend};
