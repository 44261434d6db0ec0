//! Server settings loaded from the process environment.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use fred_types::{DEFAULT_BASE_URL, FredConfig, RateLimitConfig};
use thiserror::Error;

/// A configuration value that could not be used.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable held a value of the wrong shape.
    #[error("invalid value '{value}' for {var}: {reason}")]
    Invalid {
        /// Variable name.
        var: &'static str,
        /// Raw value as found.
        value: String,
        /// What was expected instead.
        reason: String,
    },
}

/// Everything the server reads from its environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Name reported at startup.
    pub app_name: String,
    /// Version reported at startup.
    pub app_version: String,
    /// Upstream API key; empty means requests will likely be rejected.
    pub api_key: String,
    /// Upstream base URL.
    pub api_endpoint: String,
    /// Requests admitted per rate-limit period.
    pub rate_limit: u32,
    /// Length of the rate-limit period in seconds.
    pub rate_limit_period: u64,
    /// Per-request timeout in seconds.
    pub request_timeout: u64,
    /// Local data directory. Carried for deployments; nothing is stored yet.
    pub storage_path: PathBuf,
    /// Default log filter directive.
    pub log_level: String,
    /// File receiving a copy of the log output.
    pub log_file: PathBuf,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("app_name", &self.app_name)
            .field("app_version", &self.app_version)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .field("api_endpoint", &self.api_endpoint)
            .field("rate_limit", &self.rate_limit)
            .field("rate_limit_period", &self.rate_limit_period)
            .field("request_timeout", &self.request_timeout)
            .field("storage_path", &self.storage_path)
            .field("log_level", &self.log_level)
            .field("log_file", &self.log_file)
            .finish()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "fred-mcp-server".to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            api_key: String::new(),
            api_endpoint: DEFAULT_BASE_URL.to_string(),
            rate_limit: 120,
            rate_limit_period: 60,
            request_timeout: 30,
            storage_path: PathBuf::from("./data"),
            log_level: "info".to_string(),
            log_file: PathBuf::from("fred_mcp_server.log"),
        }
    }
}

fn parse<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            reason: e.to_string(),
            value,
        }),
    }
}

impl Settings {
    /// Load a `.env` file if present, then read the process environment.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` when a numeric variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source. Blank values count as unset.
    ///
    /// # Errors
    /// Returns `ConfigError::Invalid` when a numeric variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();
        Ok(Self {
            app_name: get("FRED_APP_NAME").unwrap_or(defaults.app_name),
            app_version: get("FRED_APP_VERSION").unwrap_or(defaults.app_version),
            api_key: lookup("FRED_API_KEY").unwrap_or_default().trim().to_string(),
            api_endpoint: get("FRED_API_ENDPOINT").unwrap_or(defaults.api_endpoint),
            rate_limit: parse("FRED_RATE_LIMIT", get("FRED_RATE_LIMIT"), defaults.rate_limit)?,
            rate_limit_period: parse(
                "FRED_RATE_LIMIT_PERIOD",
                get("FRED_RATE_LIMIT_PERIOD"),
                defaults.rate_limit_period,
            )?,
            request_timeout: parse(
                "FRED_REQUEST_TIMEOUT",
                get("FRED_REQUEST_TIMEOUT"),
                defaults.request_timeout,
            )?,
            storage_path: get("FRED_STORAGE_PATH").map_or(defaults.storage_path, PathBuf::from),
            log_level: get("FRED_LOG_LEVEL").unwrap_or(defaults.log_level),
            log_file: get("FRED_LOG_FILE").map_or(defaults.log_file, PathBuf::from),
        })
    }

    /// Client configuration derived from these settings.
    #[must_use]
    pub fn to_fred_config(&self) -> FredConfig {
        FredConfig {
            api_key: self.api_key.clone(),
            base_url: self.api_endpoint.clone(),
            rate_limit: RateLimitConfig::per_seconds(self.rate_limit, self.rate_limit_period),
            request_timeout: Duration::from_secs(self.request_timeout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Settings::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let s = load(&[]).unwrap();
        assert_eq!(s, Settings::default());
        let cfg = s.to_fred_config();
        assert_eq!(cfg.base_url, "https://api.stlouisfed.org/fred");
        assert_eq!(cfg.rate_limit, RateLimitConfig::per_seconds(120, 60));
        assert_eq!(cfg.request_timeout, Duration::from_secs(30));
        assert!(cfg.api_key.is_empty());
    }

    #[test]
    fn overrides_flow_into_client_config() {
        let s = load(&[
            ("FRED_API_KEY", " abc123 "),
            ("FRED_API_ENDPOINT", "http://localhost:8080/fred"),
            ("FRED_RATE_LIMIT", "5"),
            ("FRED_RATE_LIMIT_PERIOD", "2"),
            ("FRED_REQUEST_TIMEOUT", "7"),
            ("FRED_LOG_LEVEL", "debug"),
            ("FRED_LOG_FILE", "/tmp/fred.log"),
        ])
        .unwrap();
        assert_eq!(s.log_level, "debug");
        assert_eq!(s.log_file, PathBuf::from("/tmp/fred.log"));
        let cfg = s.to_fred_config();
        assert_eq!(cfg.api_key, "abc123");
        assert_eq!(cfg.base_url, "http://localhost:8080/fred");
        assert_eq!(cfg.rate_limit, RateLimitConfig::per_seconds(5, 2));
        assert_eq!(cfg.request_timeout, Duration::from_secs(7));
    }

    #[test]
    fn blank_values_fall_back() {
        let s = load(&[("FRED_RATE_LIMIT", "  "), ("FRED_APP_NAME", "")]).unwrap();
        assert_eq!(s.rate_limit, 120);
        assert_eq!(s.app_name, "fred-mcp-server");
    }

    #[test]
    fn malformed_numbers_are_errors() {
        let err = load(&[("FRED_RATE_LIMIT_PERIOD", "soon")]).unwrap_err();
        let ConfigError::Invalid { var, value, .. } = &err;
        assert_eq!(*var, "FRED_RATE_LIMIT_PERIOD");
        assert_eq!(value, "soon");
        assert!(err.to_string().starts_with("invalid value 'soon' for FRED_RATE_LIMIT_PERIOD"));

        assert!(load(&[("FRED_RATE_LIMIT", "-1")]).is_err());
    }

    #[test]
    fn debug_hides_api_key() {
        let s = load(&[("FRED_API_KEY", "secret")]).unwrap();
        let shown = format!("{s:?}");
        assert!(!shown.contains("secret"));
        assert!(shown.contains("<redacted>"));
    }
}
