use std::collections::BTreeMap;

use fred_core::QueryParams;
use fred_types::{
    Category, Endpoint, FredError, Observation, ObservationRequest, ObservationSet, SeriesInfo,
    Tag, VintageReport,
};

use super::RELATED_TAG_COUNT;
use super::util::take_list;
use crate::Fred;

impl Fred {
    /// Search series by free text.
    ///
    /// # Errors
    /// Returns an upstream error when the request fails.
    pub async fn search_series(&self, text: &str, limit: usize) -> Result<Vec<SeriesInfo>, FredError> {
        self.search_series_ordered(text, limit, None).await
    }

    /// Search series by free text, forwarding `order_by` when given.
    ///
    /// # Errors
    /// Returns an upstream error when the request fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::resources", skip(self))
    )]
    pub async fn search_series_ordered(
        &self,
        text: &str,
        limit: usize,
        order_by: Option<&str>,
    ) -> Result<Vec<SeriesInfo>, FredError> {
        let params = QueryParams::new()
            .with("search_text", text)
            .with("limit", limit)
            .with_opt("order_by", order_by);
        let mut body = self.api.request(Endpoint::SeriesSearch, params).await?;
        take_list(&mut body, "seriess")
    }

    /// Metadata of one series; the empty record when upstream lists none.
    ///
    /// # Errors
    /// Returns an upstream error prefixed with `Failed to get series info` when the
    /// request fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::resources", skip(self))
    )]
    pub async fn series_info(&self, series_id: &str) -> Result<SeriesInfo, FredError> {
        let mut body = self.api.fetch_series_info(series_id).await?;
        let list: Vec<SeriesInfo> = take_list(&mut body, "seriess")?;
        Ok(list.into_iter().next().unwrap_or_default())
    }

    /// Observations of one series with its metadata attached.
    ///
    /// Issues the observations request first, then exactly one metadata request. The
    /// metadata is attached even when no observation matched.
    ///
    /// # Errors
    /// Returns an upstream error when either request fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::resources", skip(self))
    )]
    pub async fn observations(
        &self,
        series_id: &str,
        req: &ObservationRequest,
    ) -> Result<ObservationSet, FredError> {
        let params = QueryParams::new()
            .with("series_id", series_id)
            .with_opt("observation_start", req.observation_start.as_deref())
            .with_opt("observation_end", req.observation_end.as_deref())
            .with_opt("frequency", req.frequency.as_deref())
            .with_opt("units", req.units.as_deref());
        let mut body = self
            .api
            .request(Endpoint::SeriesObservations, params)
            .await?;
        let observations: Vec<Observation> = take_list(&mut body, "observations")?;
        let series_info = self.series_info(series_id).await?;
        Ok(ObservationSet {
            observations,
            series_info,
        })
    }

    /// Categories a series is filed under.
    ///
    /// # Errors
    /// Returns an upstream error when the request fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::resources", skip(self))
    )]
    pub async fn series_categories(&self, series_id: &str) -> Result<Vec<Category>, FredError> {
        let params = QueryParams::new().with("series_id", series_id);
        let mut body = self.api.request(Endpoint::SeriesCategories, params).await?;
        take_list(&mut body, "categories")
    }

    /// Series sharing the most relevant tags of `series_id`.
    ///
    /// Uses the first five related tags in upstream order. A series without related
    /// tags yields an empty list and no tag search is issued.
    ///
    /// # Errors
    /// Returns an upstream error when either request fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::resources", skip(self))
    )]
    pub async fn related_series(&self, series_id: &str, limit: usize) -> Result<Vec<SeriesInfo>, FredError> {
        let params = QueryParams::new()
            .with("series_id", series_id)
            .with("limit", limit);
        let mut body = self.api.request(Endpoint::SeriesRelatedTags, params).await?;
        let tags: Vec<Tag> = take_list(&mut body, "tags")?;
        if tags.is_empty() {
            return Ok(Vec::new());
        }
        let names: Vec<&str> = tags
            .iter()
            .take(RELATED_TAG_COUNT)
            .map(|t| t.name.as_str())
            .collect();
        self.search_by_tags(&names, limit).await
    }

    /// Observations of a series as of each vintage date, fetched one date at a time.
    ///
    /// # Errors
    /// Returns the first upstream error; earlier vintages are discarded.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::resources", skip(self, vintage_dates), fields(vintage_count = vintage_dates.len()))
    )]
    pub async fn vintage_data<S: AsRef<str>>(
        &self,
        series_id: &str,
        vintage_dates: &[S],
    ) -> Result<VintageReport, FredError> {
        let mut vintages = BTreeMap::new();
        for date in vintage_dates {
            let date = date.as_ref();
            let params = QueryParams::new()
                .with("series_id", series_id)
                .with("vintage_dates", date);
            let mut body = self
                .api
                .request(Endpoint::SeriesObservations, params)
                .await?;
            let observations: Vec<Observation> = take_list(&mut body, "observations")?;
            vintages.insert(date.to_string(), observations);
        }
        Ok(VintageReport {
            series_id: series_id.to_string(),
            vintages,
        })
    }
}
