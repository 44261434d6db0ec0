use async_trait::async_trait;
use serde_json::Value;

use crate::query::QueryParams;
use fred_types::{Endpoint, FredError};

/// Upstream API contract.
///
/// Implementations issue one request per call and return the parsed JSON body. Every
/// failure, whether transport, HTTP status or malformed body, is reported as
/// [`FredError::Upstream`].
#[async_trait]
pub trait FredApi: Send + Sync {
    /// Short name of the implementation for logging.
    fn name(&self) -> &'static str;

    /// Issue a request against `endpoint` with the given parameters.
    ///
    /// Credentials and the response format are added by the implementation; callers
    /// pass only endpoint-specific parameters.
    async fn request(&self, endpoint: Endpoint, params: QueryParams) -> Result<Value, FredError>;

    /// Fetch the raw `series` payload for one series.
    ///
    /// Failures are re-wrapped with a `Failed to get series info` prefix, keeping the
    /// HTTP status when there was one.
    async fn fetch_series_info(&self, series_id: &str) -> Result<Value, FredError> {
        self.request(
            Endpoint::Series,
            QueryParams::new().with("series_id", series_id),
        )
        .await
        .map_err(|e| e.with_context("Failed to get series info"))
    }
}
