//! HTTP upstream client for the FRED web API.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use fred_core::{FredApi, QueryParams};
use fred_types::{DEFAULT_BASE_URL, Endpoint, FredConfig, FredError};
use serde_json::Value;
use url::Url;

/// User agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("fred-http/", env!("CARGO_PKG_VERSION"));

/// `FredApi` implementation issuing GET requests with `reqwest`.
#[derive(Clone)]
pub struct FredHttpClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl std::fmt::Debug for FredHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FredHttpClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl FredHttpClient {
    /// Start building a client.
    #[must_use]
    pub fn builder() -> FredHttpClientBuilder {
        FredHttpClientBuilder::default()
    }

    /// Build a client from a full configuration.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the base URL does not parse or the HTTP client cannot
    /// be constructed.
    pub fn from_config(config: &FredConfig) -> Result<Self, FredError> {
        Self::builder()
            .base_url(&config.base_url)
            .api_key(&config.api_key)
            .timeout(config.request_timeout)
            .build()
    }

    /// Base URL endpoint paths are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, FredError> {
        self.base_url
            .join(endpoint.path())
            .map_err(|e| FredError::InvalidArg(format!("cannot build URL for {endpoint}: {e}")))
    }
}

// reqwest errors print the request URL, which carries the api key.
fn transport_error(e: reqwest::Error) -> FredError {
    FredError::transport(e.without_url())
}

#[async_trait]
impl FredApi for FredHttpClient {
    fn name(&self) -> &'static str {
        "fred-http"
    }

    async fn request(&self, endpoint: Endpoint, params: QueryParams) -> Result<Value, FredError> {
        let url = self.endpoint_url(endpoint)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(target: "fred::http", endpoint = %endpoint, params = ?params, "upstream request");

        let mut query: Vec<(String, String)> = params.into_iter().collect();
        query.push(("api_key".to_string(), self.api_key.clone()));
        query.push(("file_type".to_string(), "json".to_string()));

        let response = self
            .http
            .get(url)
            .query(&query)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let text = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            #[cfg(feature = "tracing")]
            tracing::debug!(target: "fred::http", endpoint = %endpoint, status = status.as_u16(), "upstream error response");
            return Err(FredError::http_status(status.as_u16(), text));
        }

        serde_json::from_str(&text)
            .map_err(|e| FredError::transport(format!("invalid JSON body: {e}")))
    }
}

/// Builder for [`FredHttpClient`].
#[derive(Default)]
pub struct FredHttpClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    custom_client: Option<reqwest::Client>,
}

impl FredHttpClientBuilder {
    /// Base URL; defaults to the public FRED endpoint.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// API key injected into every request.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Per-request timeout; defaults to 30 seconds. Ignored with a custom client.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// User agent header. Ignored with a custom client.
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Use a preconfigured `reqwest::Client`.
    #[must_use]
    pub fn custom_client(mut self, client: reqwest::Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the base URL does not parse or the HTTP client cannot
    /// be constructed.
    pub fn build(self) -> Result<FredHttpClient, FredError> {
        let raw = self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        // Relative joins replace the last segment unless the base ends with a slash.
        let normalized = if raw.ends_with('/') {
            raw
        } else {
            format!("{raw}/")
        };
        let base_url = Url::parse(&normalized)
            .map_err(|e| FredError::InvalidArg(format!("invalid base URL '{normalized}': {e}")))?;

        let http = match self.custom_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(Duration::from_secs(30)))
                .user_agent(self.user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()))
                .build()
                .map_err(|e| FredError::InvalidArg(format!("cannot build HTTP client: {e}")))?,
        };

        Ok(FredHttpClient {
            http,
            base_url,
            api_key: self.api_key.unwrap_or_default(),
        })
    }
}
