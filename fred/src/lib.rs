//! Fred exposes the FRED economic-data API as a set of assistant-callable tools.
//!
//! Overview
//! - `Fred` is the resource access layer. Each operation issues one or more upstream
//!   requests through a `FredApi` client and shapes the result into typed records.
//! - Analysis methods fetch observations and run the pure algorithms from
//!   `fred_core::analysis` over their numeric values.
//! - `tools` maps tool names and JSON arguments onto those operations. `Fred::call_tool`
//!   is the only place where errors are turned into `{"error": ...}` payloads.
//!
//! Upstream traffic goes through a shared sliding-window gate when the client is built
//! with `Fred::from_config` or `FredBuilder::rate_limit`.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fred::{Fred, ObservationRequest};
//!
//! let fred = Fred::builder()
//!     .with_api(Arc::new(my_client))
//!     .rate_limit(fred::RateLimitConfig::per_seconds(120, 60))
//!     .build()?;
//! let set = fred
//!     .observations("UNRATE", &ObservationRequest::new().start("2020-01-01"))
//!     .await?;
//! ```
#![warn(missing_docs)]

mod analysis;
pub(crate) mod core;
mod resources;
/// Tool names, descriptors, argument parsing and dispatch.
pub mod tools;

pub use crate::core::{Fred, FredBuilder};
pub use tools::{ToolDescriptor, ToolName, descriptors};

pub use fred_core::{FredApi, Middleware, QueryParams};
pub use fred_middleware::{RateGate, RateLimitMiddleware};
pub use fred_types::{
    AnalysisError, Category, ComparedSeries, ComparisonReport, Endpoint, FredConfig, FredError,
    Observation, ObservationRequest, ObservationSet, OverallTrend, RateLimitConfig, Release,
    SeriesInfo, SeriesSummary, Statistics, StatisticsReport, Tag, TrendAnalysis,
    TrendDirection, TrendPoint, TrendReport, VintageReport,
};
