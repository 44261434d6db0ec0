use serde_json::Value;

use crate::Fred;

/// Series probed by the health check.
pub const HEALTH_PROBE_SERIES: &str = "GDP";

impl Fred {
    /// Whether the upstream answers a metadata request with a non-empty body.
    ///
    /// Never fails; any error counts as unhealthy.
    #[cfg_attr(feature = "tracing", tracing::instrument(target = "fred::resources", skip(self)))]
    pub async fn check_health(&self) -> bool {
        match self.api.fetch_series_info(HEALTH_PROBE_SERIES).await {
            Ok(body) => {
                let healthy = !is_empty_body(&body);
                #[cfg(feature = "tracing")]
                {
                    if healthy {
                        tracing::info!(target: "fred::resources", "upstream reachable");
                    } else {
                        tracing::warn!(target: "fred::resources", "upstream returned an empty body");
                    }
                }
                healthy
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!(target: "fred::resources", error = %_e, "health check failed");
                false
            }
        }
    }
}

fn is_empty_body(body: &Value) -> bool {
    match body {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(list) => list.is_empty(),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
