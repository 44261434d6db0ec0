//! Series metadata records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Metadata snapshot for one series as returned by the upstream `series` endpoints.
///
/// The commonly used fields are typed; everything else the upstream sends is kept in
/// `extra` so that passing metadata through to callers is lossless. The default value
/// is the empty record used to signal "series not found".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesInfo {
    /// Series identifier, e.g. `GDP`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Observation frequency, e.g. `Quarterly`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    /// Units of the values, e.g. `Billions of Dollars`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    /// First available observation date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation_start: Option<String>,
    /// Last available observation date (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation_end: Option<String>,
    /// Seasonal adjustment description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seasonal_adjustment: Option<String>,
    /// Upstream timestamp of the last revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    /// Remaining upstream fields, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SeriesInfo {
    /// True for the empty "not found" record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.title.is_none()
            && self.frequency.is_none()
            && self.units.is_none()
            && self.observation_start.is_none()
            && self.observation_end.is_none()
            && self.seasonal_adjustment.is_none()
            && self.last_updated.is_none()
            && self.extra.is_empty()
    }

    /// Title when present, otherwise `fallback` (usually the requested id).
    #[must_use]
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }
}

/// Compact projection of [`SeriesInfo`] used by search results.
///
/// Missing fields serialize as `null` so every entry has the same shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Series identifier.
    pub id: Option<String>,
    /// Human-readable title.
    pub title: Option<String>,
    /// Observation frequency.
    pub frequency: Option<String>,
    /// Units of the values.
    pub units: Option<String>,
    /// First available observation date.
    pub observation_start: Option<String>,
    /// Last available observation date.
    pub observation_end: Option<String>,
    /// Seasonal adjustment description.
    pub seasonal_adjustment: Option<String>,
}

impl From<&SeriesInfo> for SeriesSummary {
    fn from(info: &SeriesInfo) -> Self {
        Self {
            id: info.id.clone(),
            title: info.title.clone(),
            frequency: info.frequency.clone(),
            units: info.units.clone(),
            observation_start: info.observation_start.clone(),
            observation_end: info.observation_end.clone(),
            seasonal_adjustment: info.seasonal_adjustment.clone(),
        }
    }
}
