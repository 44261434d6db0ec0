use fred_core::QueryParams;
use fred_types::{Category, Endpoint, FredError, Release, SeriesInfo};

use super::util::take_list;
use crate::Fred;

impl Fred {
    /// Series carrying every tag in `tags`.
    ///
    /// # Errors
    /// Returns an upstream error when the request fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::resources", skip(self, tags), fields(tag_count = tags.len()))
    )]
    pub async fn search_by_tags<S: AsRef<str>>(
        &self,
        tags: &[S],
        limit: usize,
    ) -> Result<Vec<SeriesInfo>, FredError> {
        let joined = tags.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(",");
        let params = QueryParams::new()
            .with("tag_names", joined)
            .with("limit", limit);
        let mut body = self.api.request(Endpoint::TagsSeries, params).await?;
        take_list(&mut body, "seriess")
    }

    /// Children of `parent_id`, or the root category when no parent is given.
    ///
    /// # Errors
    /// Returns an upstream error when the request fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::resources", skip(self))
    )]
    pub async fn list_categories(&self, parent_id: Option<i64>) -> Result<Vec<Category>, FredError> {
        let (endpoint, params) = match parent_id {
            Some(id) => (
                Endpoint::CategoryChildren,
                QueryParams::new().with("parent_id", id),
            ),
            None => (Endpoint::Category, QueryParams::new()),
        };
        let mut body = self.api.request(endpoint, params).await?;
        take_list(&mut body, "categories")
    }

    /// Every release upstream publishes, untruncated.
    ///
    /// # Errors
    /// Returns an upstream error when the request fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(target = "fred::resources", skip(self)))]
    pub async fn list_releases(&self) -> Result<Vec<Release>, FredError> {
        let mut body = self.api.request(Endpoint::Releases, QueryParams::new()).await?;
        take_list(&mut body, "releases")
    }

    /// Series filed directly under a category.
    ///
    /// # Errors
    /// Returns an upstream error when the request fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "fred::resources", skip(self))
    )]
    pub async fn category_series(&self, category_id: i64, limit: usize) -> Result<Vec<SeriesInfo>, FredError> {
        let params = QueryParams::new()
            .with("category_id", category_id)
            .with("limit", limit);
        let mut body = self.api.request(Endpoint::CategorySeries, params).await?;
        take_list(&mut body, "seriess")
    }
}
