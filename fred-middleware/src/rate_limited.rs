//! Rate-limited upstream wrapper.

use std::sync::Arc;

use async_trait::async_trait;
use fred_core::{FredApi, Middleware, QueryParams};
use fred_types::{Endpoint, FredError, RateLimitConfig};
use serde_json::Value;

use crate::gate::RateGate;

/// Wrapper that awaits a [`RateGate`] admission before every upstream request.
pub struct RateLimitedApi {
    inner: Arc<dyn FredApi>,
    gate: Arc<RateGate>,
}

impl RateLimitedApi {
    /// Wrap `inner` with a shared gate.
    pub fn new(inner: Arc<dyn FredApi>, gate: Arc<RateGate>) -> Self {
        Self { inner, gate }
    }

    /// Access the inner client.
    pub fn inner(&self) -> &Arc<dyn FredApi> {
        &self.inner
    }

    /// Access the gate this wrapper draws on.
    pub fn gate(&self) -> &Arc<RateGate> {
        &self.gate
    }
}

#[async_trait]
impl FredApi for RateLimitedApi {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    async fn request(&self, endpoint: Endpoint, params: QueryParams) -> Result<Value, FredError> {
        self.gate.admit().await;
        self.inner.request(endpoint, params).await
    }
}

/// Middleware config for constructing a [`RateLimitedApi`].
pub struct RateLimitMiddleware {
    gate: Arc<RateGate>,
}

impl RateLimitMiddleware {
    /// Middleware with a fresh gate for `config`.
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            gate: Arc::new(RateGate::new(config)),
        }
    }

    /// Middleware drawing on an existing gate, so several clients share one budget.
    #[must_use]
    pub const fn with_gate(gate: Arc<RateGate>) -> Self {
        Self { gate }
    }

    /// The gate applied clients will draw on.
    #[must_use]
    pub fn gate(&self) -> Arc<RateGate> {
        Arc::clone(&self.gate)
    }
}

impl Middleware for RateLimitMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn FredApi>) -> Arc<dyn FredApi> {
        Arc::new(RateLimitedApi::new(inner, self.gate))
    }

    fn name(&self) -> &'static str {
        "RateLimitedApi"
    }

    fn config_json(&self) -> Value {
        serde_json::json!({
            "capacity": self.gate.capacity(),
            "window_ms": u64::try_from(self.gate.window().as_millis()).unwrap_or(u64::MAX),
        })
    }
}
