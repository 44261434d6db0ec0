//! Fixture-backed `FredApi` for tests and examples.
#![warn(missing_docs)]

use std::collections::HashMap;

use async_trait::async_trait;
use fred_core::{Endpoint, FredApi, FredError, QueryParams};
use serde_json::{Value, json};
use tokio::sync::Mutex;

mod fixtures;

/// Series id that always fails with an HTTP 500.
pub const FAIL_SERIES: &str = "FAIL";

/// Instruction for how an endpoint should answer.
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Return the provided body immediately.
    Return(Value),
    /// Fail immediately with the provided error.
    Fail(FredError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

/// One request received by the mock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedCall {
    /// Endpoint that was requested.
    pub endpoint: Endpoint,
    /// Parameters exactly as passed by the caller.
    pub params: QueryParams,
}

#[derive(Default)]
struct InternalState {
    overrides: HashMap<Endpoint, MockBehavior>,
    calls: Vec<RecordedCall>,
}

/// Mock upstream answering from static fixtures.
///
/// Keep an `Arc<MockFred>` in the test to inspect [`MockFred::calls`] after handing a
/// clone to the code under test as `Arc<dyn FredApi>`.
#[derive(Default)]
pub struct MockFred {
    state: Mutex<InternalState>,
}

impl MockFred {
    /// Mock with fixture behavior on every endpoint.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the answer of one endpoint.
    pub async fn set_behavior(&self, endpoint: Endpoint, behavior: MockBehavior) {
        self.state.lock().await.overrides.insert(endpoint, behavior);
    }

    /// Restore fixture behavior and forget recorded calls.
    pub async fn reset(&self) {
        let mut guard = self.state.lock().await;
        guard.overrides.clear();
        guard.calls.clear();
    }

    /// Every call received so far, in order.
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.state.lock().await.calls.clone()
    }

    /// Calls received for one endpoint, in order.
    pub async fn calls_to(&self, endpoint: Endpoint) -> Vec<RecordedCall> {
        self.state
            .lock()
            .await
            .calls
            .iter()
            .filter(|c| c.endpoint == endpoint)
            .cloned()
            .collect()
    }

    fn forced_failure(endpoint: Endpoint) -> FredError {
        FredError::http_status(500, format!("forced failure: {endpoint}"))
    }

    fn limit(params: &QueryParams) -> usize {
        params
            .get("limit")
            .and_then(|l| l.parse().ok())
            .unwrap_or(1000)
    }

    fn seriess<'a>(
        iter: impl Iterator<Item = &'a fixtures::SeriesFixture>,
        limit: usize,
    ) -> Value {
        let list: Vec<Value> = iter.take(limit).map(fixtures::SeriesFixture::to_json).collect();
        json!({ "count": list.len(), "seriess": list })
    }

    fn fixture(endpoint: Endpoint, params: &QueryParams) -> Result<Value, FredError> {
        let series_id = params.get("series_id").unwrap_or_default();
        if series_id.eq_ignore_ascii_case(FAIL_SERIES) {
            return Err(Self::forced_failure(endpoint));
        }

        let body = match endpoint {
            Endpoint::Series => {
                let list: Vec<Value> = fixtures::find(series_id)
                    .map(fixtures::SeriesFixture::to_json)
                    .into_iter()
                    .collect();
                json!({ "seriess": list })
            }
            Endpoint::SeriesSearch => {
                let text = params.get("search_text").unwrap_or_default();
                Self::seriess(
                    fixtures::SERIES.iter().filter(|s| fixtures::matches_text(s, text)),
                    Self::limit(params),
                )
            }
            Endpoint::SeriesObservations => fixtures::observations(
                series_id,
                params.get("observation_start"),
                params.get("observation_end"),
                params.get("vintage_dates"),
            ),
            Endpoint::SeriesRelatedTags => fixtures::related_tags(series_id),
            Endpoint::SeriesCategories => fixtures::categories_of(series_id),
            Endpoint::TagsSeries => {
                let tags: Vec<&str> = params
                    .get("tag_names")
                    .unwrap_or_default()
                    .split(',')
                    .filter(|t| !t.is_empty())
                    .collect();
                Self::seriess(
                    fixtures::SERIES.iter().filter(|s| fixtures::matches_tags(s, &tags)),
                    Self::limit(params),
                )
            }
            Endpoint::Category => fixtures::root_categories(),
            Endpoint::CategoryChildren => {
                let parent = params
                    .get("parent_id")
                    .or_else(|| params.get("category_id"))
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(0);
                fixtures::category_children(parent)
            }
            Endpoint::CategorySeries => {
                let category = params
                    .get("category_id")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(-1);
                let ids = fixtures::category_series_ids(category);
                Self::seriess(
                    fixtures::SERIES.iter().filter(|s| ids.contains(&s.id)),
                    Self::limit(params),
                )
            }
            Endpoint::Releases => fixtures::releases(),
            _ => return Err(FredError::http_status(404, format!("unknown endpoint: {endpoint}"))),
        };
        Ok(body)
    }
}

#[async_trait]
impl FredApi for MockFred {
    fn name(&self) -> &'static str {
        "fred-mock"
    }

    async fn request(&self, endpoint: Endpoint, params: QueryParams) -> Result<Value, FredError> {
        // Record and snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push(RecordedCall {
                endpoint,
                params: params.clone(),
            });
            guard.overrides.get(&endpoint).cloned()
        };

        match behavior {
            Some(MockBehavior::Return(v)) => Ok(v),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Self::fixture(endpoint, &params),
        }
    }
}
