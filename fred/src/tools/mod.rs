//! Tool surface over [`Fred`].
//!
//! `Fred::call_tool` is the single boundary where typed results and errors become
//! JSON payloads: successes are the tool's result object, failures are
//! `{"error": "<message>"}` (plus `series_id` and `title` for analysis failures).

mod args;
mod descriptors;

use std::fmt;
use std::str::FromStr;

use fred_types::{FredError, ObservationRequest, SeriesSummary};
use serde_json::{Value, json};

pub use args::ToolArgs;
pub use descriptors::{ToolDescriptor, descriptors};

use crate::Fred;

/// Default `limit` for listing tools.
pub const DEFAULT_LIMIT: usize = 10;

/// Registered tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    /// `search_fred_series`
    SearchSeries,
    /// `fred_get_series_data`
    GetSeriesData,
    /// `fred_get_series_metadata`
    GetSeriesMetadata,
    /// `fred_get_category_series`
    GetCategorySeries,
    /// `fred_get_releases`
    GetReleases,
    /// `fred_compare_series`
    CompareSeries,
    /// `fred_calculate_statistics`
    CalculateStatistics,
    /// `fred_detect_trends`
    DetectTrends,
}

impl ToolName {
    /// Every tool, in listing order.
    pub const ALL: [Self; 8] = [
        Self::SearchSeries,
        Self::GetSeriesData,
        Self::GetSeriesMetadata,
        Self::GetCategorySeries,
        Self::GetReleases,
        Self::CompareSeries,
        Self::CalculateStatistics,
        Self::DetectTrends,
    ];

    /// Wire name of the tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SearchSeries => "search_fred_series",
            Self::GetSeriesData => "fred_get_series_data",
            Self::GetSeriesMetadata => "fred_get_series_metadata",
            Self::GetCategorySeries => "fred_get_category_series",
            Self::GetReleases => "fred_get_releases",
            Self::CompareSeries => "fred_compare_series",
            Self::CalculateStatistics => "fred_calculate_statistics",
            Self::DetectTrends => "fred_detect_trends",
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = FredError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FredError::UnknownTool {
                name: s.to_string(),
            })
    }
}

/// JSON payload reported for a failed tool call.
#[must_use]
pub fn error_payload(err: &FredError) -> Value {
    match err {
        FredError::Analysis {
            series_id, title, ..
        } => json!({
            "series_id": series_id,
            "title": title,
            "error": err.to_string(),
        }),
        other => json!({ "error": other.to_string() }),
    }
}

fn observation_range(args: &ToolArgs<'_>) -> Result<ObservationRequest, FredError> {
    Ok(ObservationRequest::new().range(
        args.optional_date("observation_start")?,
        args.optional_date("observation_end")?,
    ))
}

impl Fred {
    /// Run a tool and always answer with a JSON object.
    ///
    /// Failures are logged and returned as [`error_payload`]s; this never fails.
    pub async fn call_tool(&self, name: &str, args: &Value) -> Value {
        match self.try_call_tool(name, args).await {
            Ok(result) => result,
            Err(err) => {
                #[cfg(feature = "tracing")]
                tracing::error!(target: "fred::tools", tool = name, error = %err, "tool call failed");
                error_payload(&err)
            }
        }
    }

    /// Run a tool, keeping failures typed.
    ///
    /// # Errors
    /// `UnknownTool` for an unregistered name, argument errors for malformed
    /// arguments, and whatever the underlying operation reports.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::tools", skip(self, args))
    )]
    pub async fn try_call_tool(&self, name: &str, args: &Value) -> Result<Value, FredError> {
        let tool: ToolName = name.parse()?;
        let args = ToolArgs::new(args);
        match tool {
            ToolName::SearchSeries => {
                let query = args.required_str("query")?;
                let limit = args.usize_or("limit", DEFAULT_LIMIT)?;
                let order_by = args.optional_str("order_by")?;
                let results = self.search_series_ordered(query, limit, order_by).await?;
                let series: Vec<SeriesSummary> = results.iter().map(SeriesSummary::from).collect();
                Ok(json!({
                    "search_query": query,
                    "count": series.len(),
                    "series": series,
                }))
            }
            ToolName::GetSeriesData => {
                let series_id = args.required_str("series_id")?;
                let mut req = observation_range(&args)?;
                req.frequency = args.optional_str("frequency")?.map(str::to_string);
                let set = self.observations(series_id, &req).await?;
                Ok(json!({
                    "series_id": series_id,
                    "count": set.observations.len(),
                    "observations": set.observations,
                    "series_info": set.series_info,
                }))
            }
            ToolName::GetSeriesMetadata => {
                let series_id = args.required_str("series_id")?;
                let info = self.series_info(series_id).await?;
                Ok(json!(info))
            }
            ToolName::GetCategorySeries => {
                let category_id = args.required_i64("category_id")?;
                let limit = args.usize_or("limit", DEFAULT_LIMIT)?;
                let results = self.category_series(category_id, limit).await?;
                let series: Vec<SeriesSummary> = results.iter().map(SeriesSummary::from).collect();
                Ok(json!({
                    "category_id": category_id,
                    "count": series.len(),
                    "series": series,
                }))
            }
            ToolName::GetReleases => {
                let limit = args.usize_or("limit", DEFAULT_LIMIT)?;
                let mut releases = self.list_releases().await?;
                releases.truncate(limit);
                Ok(json!({
                    "releases": releases,
                    "count": releases.len(),
                }))
            }
            ToolName::CompareSeries => {
                let series_ids = args.required_str_list("series_ids")?;
                let req = observation_range(&args)?;
                let report = self.compare_series(&series_ids, &req).await?;
                Ok(json!(report))
            }
            ToolName::CalculateStatistics => {
                let series_id = args.required_str("series_id")?;
                let req = observation_range(&args)?;
                let report = self.calculate_statistics(series_id, &req).await?;
                Ok(json!(report))
            }
            ToolName::DetectTrends => {
                let series_id = args.required_str("series_id")?;
                let req = observation_range(&args)?;
                let window_size = args.usize_or(
                    "window_size",
                    fred_core::DEFAULT_TREND_WINDOW.get(),
                )?;
                let report = self.detect_trends(series_id, &req, window_size).await?;
                Ok(json!(report))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fred_types::AnalysisError;

    #[test]
    fn names_roundtrip() {
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>().unwrap(), tool);
        }
        assert_eq!(
            "nope".parse::<ToolName>(),
            Err(FredError::UnknownTool {
                name: "nope".to_string()
            })
        );
    }

    #[test]
    fn analysis_errors_carry_series() {
        let err = FredError::analysis("DGS10", "10-Year", AnalysisError::NoNumericValues);
        assert_eq!(
            error_payload(&err),
            json!({"series_id": "DGS10", "title": "10-Year", "error": "No numeric values found"})
        );
        assert_eq!(
            error_payload(&FredError::missing("series_id")),
            json!({"error": "missing required argument: series_id"})
        );
    }

    #[test]
    fn descriptors_cover_all_tools() {
        let all = descriptors();
        assert_eq!(all.len(), 8);
        for d in &all {
            assert_eq!(d.input_schema["type"], "object");
        }
        let search = &all[0];
        assert_eq!(search.name, "search_fred_series");
        assert_eq!(search.input_schema["required"], json!(["query"]));
        let listed = serde_json::to_value(search).unwrap();
        assert!(listed.get("inputSchema").is_some());
    }
}
