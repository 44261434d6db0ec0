use std::sync::Arc;

use fred_core::{FredApi, Middleware};
use fred_http::FredHttpClient;
use fred_middleware::{ApiBuilder, RateGate};
use fred_types::{FredConfig, FredError, RateLimitConfig};

/// Resource access layer over one upstream client.
///
/// Cheap to clone; clones share the client and any rate gate behind it.
#[derive(Clone)]
pub struct Fred {
    pub(crate) api: Arc<dyn FredApi>,
}

impl Fred {
    /// Wrap an already composed client as-is.
    #[must_use]
    pub fn new(api: Arc<dyn FredApi>) -> Self {
        Self { api }
    }

    /// Start building a `Fred` instance.
    #[must_use]
    pub fn builder() -> FredBuilder {
        FredBuilder::new()
    }

    /// HTTP client for `config`, rate limited by a fresh gate.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the base URL is malformed.
    pub fn from_config(config: &FredConfig) -> Result<Self, FredError> {
        let http = FredHttpClient::from_config(config)?;
        Self::builder()
            .with_api(Arc::new(http))
            .rate_limit(config.rate_limit)
            .build()
    }

    /// The composed upstream client.
    #[must_use]
    pub fn api(&self) -> &Arc<dyn FredApi> {
        &self.api
    }
}

/// Builder for constructing a [`Fred`] with middleware.
#[derive(Default)]
pub struct FredBuilder {
    raw: Option<Arc<dyn FredApi>>,
    rate_limit: Option<RateLimitConfig>,
    gate: Option<Arc<RateGate>>,
    layers: Vec<Box<dyn Middleware>>,
}

impl FredBuilder {
    /// Builder with no client and no middleware.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the raw upstream client.
    #[must_use]
    pub fn with_api(mut self, api: Arc<dyn FredApi>) -> Self {
        self.raw = Some(api);
        self
    }

    /// Rate limit upstream requests with a fresh gate.
    #[must_use]
    pub const fn rate_limit(mut self, config: RateLimitConfig) -> Self {
        self.rate_limit = Some(config);
        self
    }

    /// Rate limit upstream requests with an existing gate. Takes precedence over
    /// [`FredBuilder::rate_limit`].
    #[must_use]
    pub fn shared_gate(mut self, gate: Arc<RateGate>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Add a custom middleware outside the rate limiter.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.push(layer);
        self
    }

    /// Compose the client and build.
    ///
    /// # Errors
    /// Returns `InvalidArg` when no upstream client was set.
    pub fn build(self) -> Result<Fred, FredError> {
        let raw = self
            .raw
            .ok_or_else(|| FredError::InvalidArg("no upstream client configured".to_string()))?;

        let mut builder = ApiBuilder::new(raw);
        builder = match (self.gate, self.rate_limit) {
            (Some(gate), _) => builder.with_gate(gate),
            (None, Some(cfg)) => builder.with_rate_limit(cfg),
            (None, None) => builder,
        };
        for layer in self.layers {
            builder = builder.layer(layer);
        }

        Ok(Fred {
            api: builder.build(),
        })
    }
}
