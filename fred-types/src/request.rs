//! Request parameters for observation fetches.

use serde::{Deserialize, Serialize};

/// Optional filters for an observations request.
///
/// Unset filters are not sent upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationRequest {
    /// First date to include (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation_start: Option<String>,
    /// Last date to include (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation_end: Option<String>,
    /// Aggregation frequency code (`d`, `w`, `bw`, `m`, `q`, `sa`, `a`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    /// Units transformation code (`lin`, `chg`, `ch1`, `pch`, `pc1`, `pca`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

impl ObservationRequest {
    /// Request with no filters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first date to include.
    #[must_use]
    pub fn start(mut self, date: impl Into<String>) -> Self {
        self.observation_start = Some(date.into());
        self
    }

    /// Set the last date to include.
    #[must_use]
    pub fn end(mut self, date: impl Into<String>) -> Self {
        self.observation_end = Some(date.into());
        self
    }

    /// Set both bounds, leaving `None` bounds unset.
    #[must_use]
    pub fn range(mut self, start: Option<String>, end: Option<String>) -> Self {
        self.observation_start = start;
        self.observation_end = end;
        self
    }

    /// Set the aggregation frequency.
    #[must_use]
    pub fn frequency(mut self, frequency: impl Into<String>) -> Self {
        self.frequency = Some(frequency.into());
        self
    }

    /// Set the units transformation.
    #[must_use]
    pub fn units(mut self, units: impl Into<String>) -> Self {
        self.units = Some(units.into());
        self
    }
}
