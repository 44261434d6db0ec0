use fred_types::{AnalysisError, FredConfig, FredError, RateLimitConfig};

#[test]
fn upstream_messages() {
    let e = FredError::http_status(404, "Bad Request.  The series does not exist.");
    assert_eq!(e.status(), Some(404));
    assert_eq!(
        e.to_string(),
        "API error (404): Bad Request.  The series does not exist."
    );

    let t = FredError::transport("connection refused");
    assert_eq!(t.status(), None);
    assert_eq!(t.to_string(), "Request failed: connection refused");
}

#[test]
fn context_preserves_status() {
    let e = FredError::http_status(500, "boom").with_context("Failed to get series info");
    assert!(e.is_upstream());
    assert_eq!(e.status(), Some(500));
    assert_eq!(e.to_string(), "Failed to get series info: API error (500): boom");
}

#[test]
fn analysis_messages() {
    let e = FredError::analysis("GDP", "Gross Domestic Product", AnalysisError::NoNumericValues);
    assert_eq!(e.to_string(), "No numeric values found");

    let e = AnalysisError::InsufficientData { needed: 6, found: 4 };
    assert_eq!(
        e.to_string(),
        "Not enough data points for trend detection (need at least 6)"
    );
}

#[test]
fn error_roundtrip() {
    let e = FredError::missing("series_id");
    let json = serde_json::to_string(&e).expect("serialize error");
    let de: FredError = serde_json::from_str(&json).expect("deserialize error");
    assert_eq!(de, e);
}

#[test]
fn config_defaults_and_key_not_serialized() {
    let cfg = FredConfig::with_api_key("secret");
    assert_eq!(cfg.rate_limit, RateLimitConfig::per_seconds(120, 60));
    assert_eq!(cfg.request_timeout.as_secs(), 30);

    let json = serde_json::to_string(&cfg).expect("serialize config");
    assert!(!json.contains("secret"));

    let de: FredConfig = serde_json::from_str(&json).expect("deserialize config");
    assert!(de.api_key.is_empty());
    assert_eq!(de.base_url, fred_types::DEFAULT_BASE_URL);
}
