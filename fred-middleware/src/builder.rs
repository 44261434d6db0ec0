//! Builder for composing an upstream client with middleware layers.
//!
//! Layers form an onion around the raw client:
//!
//! ```text
//! Resource call
//!     ↓
//! Outermost middleware
//!     ↓
//! RateLimitedApi (awaits the gate)
//!     ↓
//! Raw client (issues the HTTP request)
//! ```
//!
//! `layers` is stored outermost-first (last added = outermost) and applied in reverse
//! during `build()`.

use std::sync::Arc;

use fred_core::{FredApi, Middleware};
use fred_types::RateLimitConfig;

use crate::gate::RateGate;
use crate::rate_limited::RateLimitMiddleware;

const RATE_LIMIT_LAYER: &str = "RateLimitedApi";

/// Middleware builder for composing a client with layered wrappers.
pub struct ApiBuilder {
    raw: Arc<dyn FredApi>,
    layers: Vec<Box<dyn Middleware>>,
}

impl ApiBuilder {
    /// Create a builder from a raw, unwrapped client.
    #[must_use]
    pub fn new(raw: Arc<dyn FredApi>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace rate limiting with a fresh gate for `config`.
    #[must_use]
    pub fn with_rate_limit(self, config: RateLimitConfig) -> Self {
        self.rate_limit_layer(RateLimitMiddleware::new(config))
    }

    /// Add or replace rate limiting drawing on an existing gate.
    #[must_use]
    pub fn with_gate(self, gate: Arc<RateGate>) -> Self {
        self.rate_limit_layer(RateLimitMiddleware::with_gate(gate))
    }

    /// Remove rate limiting if present.
    #[must_use]
    pub fn without_rate_limit(mut self) -> Self {
        self.layers.retain(|m| m.name() != RATE_LIMIT_LAYER);
        self
    }

    fn rate_limit_layer(mut self, layer: RateLimitMiddleware) -> Self {
        self.layers.retain(|m| m.name() != RATE_LIMIT_LAYER);
        self.layers.insert(0, Box::new(layer));
        self
    }

    /// Add an arbitrary middleware layer at the outermost position.
    #[must_use]
    pub fn layer(mut self, layer: Box<dyn Middleware>) -> Self {
        self.layers.insert(0, layer);
        self
    }

    /// Names and configuration of the layers, outermost first, ending with the raw client.
    #[must_use]
    pub fn describe(&self) -> Vec<(&'static str, serde_json::Value)> {
        self.layers
            .iter()
            .map(|l| (l.name(), l.config_json()))
            .chain(std::iter::once((
                "RawClient",
                serde_json::json!({ "name": self.raw.name() }),
            )))
            .collect()
    }

    /// Build the wrapped client, applying layers innermost first.
    #[must_use]
    pub fn build(self) -> Arc<dyn FredApi> {
        let mut acc: Arc<dyn FredApi> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
