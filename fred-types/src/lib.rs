//! Data transfer objects, configuration and errors shared across the fred workspace.
#![warn(missing_docs)]

mod analysis;
mod config;
mod endpoint;
mod error;
mod observation;
mod records;
mod reports;
mod request;
mod series;

pub use analysis::{OverallTrend, Statistics, TrendAnalysis, TrendDirection, TrendPoint};
pub use config::{DEFAULT_BASE_URL, FredConfig, RateLimitConfig};
pub use endpoint::Endpoint;
pub use error::{AnalysisError, FredError};
pub use observation::{MISSING_VALUE, Observation, ObservationSet};
pub use records::{Category, Release, Tag};
pub use request::ObservationRequest;
pub use reports::{ComparedSeries, ComparisonReport, StatisticsReport, TrendReport, VintageReport};
pub use series::{SeriesInfo, SeriesSummary};
