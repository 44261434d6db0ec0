//! Middleware trait for wrapping `FredApi` implementations.

use std::sync::Arc;

use crate::connector::FredApi;

/// Trait implemented by upstream middleware layers.
///
/// A middleware consumes an inner `FredApi` and returns a wrapped one that augments
/// or restricts its behavior (e.g., rate limiting).
pub trait Middleware: Send + Sync {
    /// Apply this middleware to wrap an inner client and return the wrapped client.
    fn apply(self: Box<Self>, inner: Arc<dyn FredApi>) -> Arc<dyn FredApi>;

    /// Human-readable middleware name for introspection/logging.
    fn name(&self) -> &'static str;

    /// Opaque configuration snapshot for serialization/inspection.
    fn config_json(&self) -> serde_json::Value;
}
