//! Analysis over fetched observations.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use fred_core::{detect_trend, statistics};
use fred_types::{
    ComparedSeries, ComparisonReport, FredError, ObservationRequest, StatisticsReport,
    TrendReport,
};

use crate::Fred;

impl Fred {
    /// Observations of several series side by side, fetched one after another.
    ///
    /// # Errors
    /// Returns `MissingArgument` for an empty id list, otherwise the first upstream
    /// error; nothing is returned for series fetched before it.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::analysis", skip(self, series_ids, req), fields(series_count = series_ids.len()))
    )]
    pub async fn compare_series<S: AsRef<str>>(
        &self,
        series_ids: &[S],
        req: &ObservationRequest,
    ) -> Result<ComparisonReport, FredError> {
        if series_ids.is_empty() {
            return Err(FredError::missing("series_ids"));
        }
        let mut series = BTreeMap::new();
        for id in series_ids {
            let id = id.as_ref();
            let set = self.observations(id, req).await?;
            let title = set.series_info.title_or(id).to_string();
            series.insert(
                id.to_string(),
                ComparedSeries {
                    title,
                    observations: set.observations,
                },
            );
        }
        Ok(ComparisonReport { series })
    }

    /// Summary statistics over the numeric observations of a series.
    ///
    /// # Errors
    /// Returns an upstream error when fetching fails, or an `Analysis` error carrying
    /// the series id and title when no value is numeric.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::analysis", skip(self))
    )]
    pub async fn calculate_statistics(
        &self,
        series_id: &str,
        req: &ObservationRequest,
    ) -> Result<StatisticsReport, FredError> {
        let set = self.observations(series_id, req).await?;
        let title = set.series_info.title_or(series_id).to_string();
        match statistics(&set.numeric_values()) {
            Ok(statistics) => Ok(StatisticsReport {
                series_id: series_id.to_string(),
                title,
                statistics,
            }),
            Err(e) => Err(FredError::analysis(series_id, title, e)),
        }
    }

    /// Moving-average trend of a series.
    ///
    /// # Errors
    /// Returns `InvalidArg` for a zero window, an upstream error when fetching fails,
    /// or an `Analysis` error when fewer than `2 * window_size` values are numeric.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::analysis", skip(self))
    )]
    pub async fn detect_trends(
        &self,
        series_id: &str,
        req: &ObservationRequest,
        window_size: usize,
    ) -> Result<TrendReport, FredError> {
        let window = NonZeroUsize::new(window_size)
            .ok_or_else(|| FredError::InvalidArg("window_size must be at least 1".to_string()))?;
        let set = self.observations(series_id, req).await?;
        let title = set.series_info.title_or(series_id).to_string();
        match detect_trend(&set.numeric_points(), window) {
            Ok(analysis) => Ok(TrendReport {
                series_id: series_id.to_string(),
                title,
                analysis,
            }),
            Err(e) => Err(FredError::analysis(series_id, title, e)),
        }
    }
}
