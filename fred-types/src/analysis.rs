//! Outputs of the statistics and trend algorithms.

use serde::{Deserialize, Serialize};

/// Summary statistics over the numeric values of a series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of numeric values.
    pub count: usize,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median; the mean of the two middle values for even counts.
    pub median: f64,
    /// Sample standard deviation; only present with at least two values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub std_dev: Option<f64>,
}

/// Direction between two consecutive moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// The later average is strictly greater.
    Up,
    /// The later average is strictly smaller.
    Down,
    /// Both averages are equal.
    Flat,
}

/// Overall direction of a series decided by plurality of its transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallTrend {
    /// More `up` transitions than `down`.
    Upward,
    /// More `down` transitions than `up`.
    Downward,
    /// Neither direction wins.
    Flat,
}

/// One transition of the moving average, attached to the point closing the later window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Date of the last point of the later window.
    pub date: String,
    /// Value of the last point of the later window.
    pub value: f64,
    /// Moving average of the later window.
    pub moving_avg: f64,
    /// Direction relative to the previous window.
    pub trend: TrendDirection,
}

/// Result of moving-average trend detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendAnalysis {
    /// Window length used for the moving average.
    pub window_size: usize,
    /// Direction decided over all transitions.
    pub overall_trend: OverallTrend,
    /// Per-transition details in chronological order.
    pub trend_details: Vec<TrendPoint>,
}
