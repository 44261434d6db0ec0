//! Resource access operations on [`Fred`](crate::Fred).
//!
//! Each operation issues its upstream requests in order and lets upstream errors
//! bubble, except [`Fred::check_health`](crate::Fred::check_health) which never fails.

mod catalog;
mod health;
mod series;
mod util;

/// Number of related tags used to look up related series.
pub const RELATED_TAG_COUNT: usize = 5;
