use serde::Serialize;
use serde_json::{Value, json};

use super::ToolName;

/// Listing entry for one tool: name, description and JSON input schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    /// Tool name as used in calls.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// JSON schema of the argument object.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// Descriptors of every tool, in listing order.
#[must_use]
pub fn descriptors() -> Vec<ToolDescriptor> {
    ToolName::ALL.iter().map(|t| t.descriptor()).collect()
}

fn string(description: &str) -> Value {
    json!({ "type": "string", "description": description })
}

fn integer(description: &str) -> Value {
    json!({ "type": "integer", "description": description })
}

fn date(which: &str) -> Value {
    string(&format!("{which} date (YYYY-MM-DD)"))
}

impl ToolName {
    /// Descriptor of this tool.
    #[must_use]
    pub fn descriptor(self) -> ToolDescriptor {
        let (description, input_schema) = match self {
            Self::SearchSeries => (
                "Search for FRED data series by keywords",
                json!({
                    "type": "object",
                    "properties": {
                        "query": string("Search query for FRED series"),
                        "limit": integer("Maximum number of results to return (default: 10)"),
                        "order_by": string("How to order results (popularity, title, etc.)"),
                    },
                    "required": ["query"],
                }),
            ),
            Self::GetSeriesData => (
                "Retrieve time series data for a specific FRED series",
                json!({
                    "type": "object",
                    "properties": {
                        "series_id": string("FRED series ID (e.g., 'GDP', 'UNRATE')"),
                        "observation_start": date("Start"),
                        "observation_end": date("End"),
                        "frequency": string("Data frequency (d, w, bw, m, q, sa, a)"),
                    },
                    "required": ["series_id"],
                }),
            ),
            Self::GetSeriesMetadata => (
                "Get metadata for a specific FRED series",
                json!({
                    "type": "object",
                    "properties": {
                        "series_id": string("FRED series ID (e.g., 'GDP', 'UNRATE')"),
                    },
                    "required": ["series_id"],
                }),
            ),
            Self::GetCategorySeries => (
                "List series in a FRED category",
                json!({
                    "type": "object",
                    "properties": {
                        "category_id": integer("FRED category ID"),
                        "limit": integer("Maximum number of results to return (default: 10)"),
                    },
                    "required": ["category_id"],
                }),
            ),
            Self::GetReleases => (
                "Get economic data releases from FRED",
                json!({
                    "type": "object",
                    "properties": {
                        "limit": integer("Maximum number of results to return (default: 10)"),
                    },
                }),
            ),
            Self::CompareSeries => (
                "Compare multiple FRED data series",
                json!({
                    "type": "object",
                    "properties": {
                        "series_ids": {
                            "type": "array",
                            "items": { "type": "string" },
                            "description": "List of FRED series IDs to compare",
                        },
                        "observation_start": date("Start"),
                        "observation_end": date("End"),
                    },
                    "required": ["series_ids"],
                }),
            ),
            Self::CalculateStatistics => (
                "Calculate basic statistics for a FRED series",
                json!({
                    "type": "object",
                    "properties": {
                        "series_id": string("FRED series ID"),
                        "observation_start": date("Start"),
                        "observation_end": date("End"),
                    },
                    "required": ["series_id"],
                }),
            ),
            Self::DetectTrends => (
                "Identify trends in FRED economic data",
                json!({
                    "type": "object",
                    "properties": {
                        "series_id": string("FRED series ID"),
                        "observation_start": date("Start"),
                        "observation_end": date("End"),
                        "window_size": integer("Window size for trend detection (default: 3)"),
                    },
                    "required": ["series_id"],
                }),
            ),
        };
        ToolDescriptor {
            name: self.as_str(),
            description,
            input_schema,
        }
    }
}
