mod catalog;
mod observations;
mod series;

pub use catalog::{categories_of, category_children, category_series_ids, related_tags, releases, root_categories};
pub use observations::observations;
pub use series::{SERIES, SeriesFixture, find, matches_tags, matches_text};
