//! Composite results assembled by the resource and analysis layers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::analysis::{Statistics, TrendAnalysis};
use crate::observation::Observation;

/// Observations of one series as of several vintage dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VintageReport {
    /// Series the vintages belong to.
    pub series_id: String,
    /// Observations keyed by vintage date.
    pub vintages: BTreeMap<String, Vec<Observation>>,
}

/// One entry of a [`ComparisonReport`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparedSeries {
    /// Series title, or its id when metadata had none.
    pub title: String,
    /// Observations in upstream order.
    pub observations: Vec<Observation>,
}

/// Observations of several series side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Compared series keyed by id.
    pub series: BTreeMap<String, ComparedSeries>,
}

/// Statistics of a fetched series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    /// Series the statistics were computed for.
    pub series_id: String,
    /// Series title, or its id when metadata had none.
    pub title: String,
    /// Computed statistics.
    #[serde(flatten)]
    pub statistics: Statistics,
}

/// Trend analysis of a fetched series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    /// Series the trend was detected for.
    pub series_id: String,
    /// Series title, or its id when metadata had none.
    pub title: String,
    /// Detected trend.
    #[serde(flatten)]
    pub analysis: TrendAnalysis,
}
