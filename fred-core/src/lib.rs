//! fred-core
//!
//! Contract and algorithms shared across the fred workspace.
//!
//! - `connector`: the `FredApi` trait implemented by upstream clients and wrappers.
//! - `query`: `QueryParams`, the parameter list passed with each request.
//! - `middleware`: the `Middleware` trait used to stack wrappers around a client.
//! - `analysis`: statistics and trend detection over numeric observation values.
#![warn(missing_docs)]

/// Statistics and trend detection.
pub mod analysis;
/// The `FredApi` upstream trait.
pub mod connector;
/// Middleware trait implemented by upstream wrappers.
pub mod middleware;
/// Query parameter list.
pub mod query;

pub use analysis::{DEFAULT_TREND_WINDOW, detect_trend, statistics};
pub use connector::FredApi;
pub use middleware::Middleware;
pub use query::QueryParams;

pub use fred_types::*;
