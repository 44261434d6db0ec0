//! Error types shared by every crate in the workspace.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Preconditions of the analysis algorithms that a fetched series did not meet.
#[derive(Debug, Error, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnalysisError {
    /// Every observation value was missing or non-numeric.
    #[error("No numeric values found")]
    NoNumericValues,

    /// Trend detection needs at least two full windows of numeric values.
    #[error("Not enough data points for trend detection (need at least {needed})")]
    InsufficientData {
        /// Minimum number of numeric points required (`2 * window_size`).
        needed: usize,
        /// Number of numeric points actually available.
        found: usize,
    },
}

/// Unified error type for the fred workspace.
///
/// Upstream transport and HTTP failures collapse into a single [`FredError::Upstream`]
/// kind so callers never need to tell them apart; argument problems and analysis
/// preconditions have their own variants. A series that does not exist is not an error
/// and is represented by an empty metadata record instead.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FredError {
    /// The upstream API could not be reached or answered with a failure.
    #[error("{message}")]
    Upstream {
        /// HTTP status when the failure was a non-2xx response.
        status: Option<u16>,
        /// Human-readable cause, including the response body for HTTP failures.
        message: String,
    },

    /// A required argument was absent or empty.
    #[error("missing required argument: {name}")]
    MissingArgument {
        /// Argument name as it appears in the tool schema.
        name: String,
    },

    /// An argument was present but malformed.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Fetched data did not satisfy the preconditions of an analysis.
    #[error("{error}")]
    Analysis {
        /// Series the analysis ran over.
        series_id: String,
        /// Series title (falls back to the id when metadata had none).
        title: String,
        /// Which precondition failed.
        error: AnalysisError,
    },

    /// The requested tool name is not registered.
    #[error("Unknown tool '{name}'")]
    UnknownTool {
        /// Name that was requested.
        name: String,
    },
}

impl FredError {
    /// Helper: build an `Upstream` error for a transport-level failure.
    pub fn transport(cause: impl std::fmt::Display) -> Self {
        Self::Upstream {
            status: None,
            message: format!("Request failed: {cause}"),
        }
    }

    /// Helper: build an `Upstream` error for a non-2xx response.
    pub fn http_status(status: u16, body: impl AsRef<str>) -> Self {
        Self::Upstream {
            status: Some(status),
            message: format!("API error ({status}): {}", body.as_ref()),
        }
    }

    /// Helper: build a `MissingArgument` error.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    /// Helper: build an `Analysis` error for a series.
    pub fn analysis(
        series_id: impl Into<String>,
        title: impl Into<String>,
        error: AnalysisError,
    ) -> Self {
        Self::Analysis {
            series_id: series_id.into(),
            title: title.into(),
            error,
        }
    }

    /// Re-wrap an error with leading context, keeping it in the upstream kind.
    ///
    /// The HTTP status of an upstream error is preserved; every other variant is
    /// flattened into its message.
    #[must_use]
    pub fn with_context(self, context: &str) -> Self {
        let status = self.status();
        Self::Upstream {
            status,
            message: format!("{context}: {self}"),
        }
    }

    /// HTTP status carried by an upstream error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns true for failures originating from the upstream API.
    #[must_use]
    pub const fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }
}
