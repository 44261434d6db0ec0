//! Listing records returned by the category, release and tag endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node of the upstream category tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Numeric category id; `0` is the root.
    pub id: i64,
    /// Category name.
    pub name: String,
    /// Parent category id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    /// Remaining upstream fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A data release published upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Release {
    /// Numeric release id.
    pub id: i64,
    /// Release name.
    pub name: String,
    /// Whether the release has an associated press release.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub press_release: Option<bool>,
    /// Link to the publisher's release page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Remaining upstream fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A tag attached to series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name, as used in `tag_names` queries.
    pub name: String,
    /// Tag group id, e.g. `geo` or `freq`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Upstream popularity score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<i64>,
    /// Number of series carrying the tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_count: Option<i64>,
    /// Remaining upstream fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
