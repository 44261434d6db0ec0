//! Configuration types shared by the client stack and the server.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default base URL of the FRED API.
pub const DEFAULT_BASE_URL: &str = "https://api.stlouisfed.org/fred";

/// Configuration for a sliding-window request budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum number of admissions within any trailing window.
    pub capacity: u32,
    /// Length of the trailing window.
    pub window: Duration,
}

impl RateLimitConfig {
    /// Build a config from a capacity and a window length in seconds.
    #[must_use]
    pub const fn per_seconds(capacity: u32, seconds: u64) -> Self {
        Self {
            capacity,
            window: Duration::from_secs(seconds),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self::per_seconds(120, 60)
    }
}

/// Everything needed to talk to the upstream API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FredConfig {
    /// API key injected as `api_key` on every request.
    #[serde(default, skip_serializing)]
    pub api_key: String,
    /// Base URL that endpoint paths are appended to.
    pub base_url: String,
    /// Outbound request budget.
    pub rate_limit: RateLimitConfig,
    /// Per-request timeout applied by the HTTP client.
    pub request_timeout: Duration,
}

impl FredConfig {
    /// Default configuration carrying the given API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }
}

impl Default for FredConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            rate_limit: RateLimitConfig::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}
