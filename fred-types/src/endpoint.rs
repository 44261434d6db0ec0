//! Upstream endpoint identifiers.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Upstream endpoints consumed by the resource layer.
///
/// Each variant maps to one relative path under the configured base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Endpoint {
    /// Metadata for a single series (`series`).
    Series,
    /// Free-text series search (`series/search`).
    SeriesSearch,
    /// Observation values for a series (`series/observations`).
    SeriesObservations,
    /// Tags related to a series (`series/related_tags`).
    SeriesRelatedTags,
    /// Categories a series belongs to (`series/categories`).
    SeriesCategories,
    /// Series matching a set of tags (`tags/series`).
    TagsSeries,
    /// Root category (`category`).
    Category,
    /// Children of a category (`category/children`).
    CategoryChildren,
    /// Series within a category (`category/series`).
    CategorySeries,
    /// All releases (`releases`).
    Releases,
}

impl Endpoint {
    /// Relative path appended to the base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Series => "series",
            Self::SeriesSearch => "series/search",
            Self::SeriesObservations => "series/observations",
            Self::SeriesRelatedTags => "series/related_tags",
            Self::SeriesCategories => "series/categories",
            Self::TagsSeries => "tags/series",
            Self::Category => "category",
            Self::CategoryChildren => "category/children",
            Self::CategorySeries => "category/series",
            Self::Releases => "releases",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
