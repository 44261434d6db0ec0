//! Observation values and the sets they are fetched in.

use serde::{Deserialize, Deserializer, Serialize};

use crate::series::SeriesInfo;

/// Marker the upstream uses for a missing value.
pub const MISSING_VALUE: &str = ".";

/// One dated value of a series.
///
/// The value is kept as the raw upstream string; use [`Observation::numeric_value`] to
/// read it as a number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation date (`YYYY-MM-DD`).
    #[serde(default)]
    pub date: String,
    /// Raw value; may be [`MISSING_VALUE`] or otherwise non-numeric.
    ///
    /// Numbers are read as their decimal text; `null` and other non-string values
    /// become the empty string.
    #[serde(default, deserialize_with = "lenient_value")]
    pub value: String,
    /// Start of the real-time period the value was valid for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realtime_start: Option<String>,
    /// End of the real-time period the value was valid for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub realtime_end: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Text(String),
    Number(serde_json::Number),
    Other(serde::de::IgnoredAny),
}

fn lenient_value<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawValue::deserialize(deserializer)? {
        RawValue::Text(s) => s,
        RawValue::Number(n) => n.to_string(),
        RawValue::Other(_) => String::new(),
    })
}

impl Observation {
    /// Build an observation from a date and a raw value.
    pub fn new(date: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            value: value.into(),
            realtime_start: None,
            realtime_end: None,
        }
    }

    /// The value as a finite number, or `None` when it is missing or unparsable.
    #[must_use]
    pub fn numeric_value(&self) -> Option<f64> {
        let trimmed = self.value.trim();
        if trimmed.is_empty() || trimmed == MISSING_VALUE {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// Observations of one series paired with the metadata fetched for it.
///
/// Observations keep upstream order, which is chronological.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservationSet {
    /// Observations in upstream order.
    pub observations: Vec<Observation>,
    /// Metadata of the series; empty when the series was not found.
    pub series_info: SeriesInfo,
}

impl ObservationSet {
    /// Numeric values in order, skipping missing or unparsable entries.
    #[must_use]
    pub fn numeric_values(&self) -> Vec<f64> {
        self.observations
            .iter()
            .filter_map(Observation::numeric_value)
            .collect()
    }

    /// `(date, value)` pairs for numeric entries; a skipped value also skips its date.
    #[must_use]
    pub fn numeric_points(&self) -> Vec<(&str, f64)> {
        self.observations
            .iter()
            .filter_map(|o| o.numeric_value().map(|v| (o.date.as_str(), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Observation {
        serde_json::from_value(json!({"date": "2024-01-01", "value": value})).unwrap()
    }

    #[test]
    fn non_string_values_do_not_reject_the_entry() {
        assert_eq!(parse(json!("1.5")).numeric_value(), Some(1.5));
        assert_eq!(parse(json!(3)).value, "3");
        assert_eq!(parse(json!(3)).numeric_value(), Some(3.0));
        assert_eq!(parse(json!(2.25)).numeric_value(), Some(2.25));
        assert_eq!(parse(json!(null)).value, "");
        assert_eq!(parse(json!(null)).numeric_value(), None);
        assert_eq!(parse(json!(true)).numeric_value(), None);
        assert_eq!(parse(json!(".")).numeric_value(), None);

        let missing: Observation = serde_json::from_value(json!({"date": "2024-01-01"})).unwrap();
        assert_eq!(missing.value, "");
    }
}
