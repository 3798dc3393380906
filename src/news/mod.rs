//! Company headlines from NewsAPI.

mod api;
mod model;
mod wire;

pub use model::{Article, NewsWindow};

use chrono::NaiveDate;

use crate::core::{AlertClient, AlertError};

/// How many headlines a run keeps.
pub const DEFAULT_HEADLINE_LIMIT: usize = 3;

/// A builder for one headline search.
pub struct NewsBuilder {
    client: AlertClient,
    query: String,
    api_key: String,
    window: NewsWindow,
    limit: usize,
    today: Option<NaiveDate>,
}

impl NewsBuilder {
    /// Creates a builder searching titles for `query`, today only, keeping three results.
    pub fn new(client: &AlertClient, query: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            query: query.into(),
            api_key: api_key.into(),
            window: NewsWindow::TODAY,
            limit: DEFAULT_HEADLINE_LIMIT,
            today: None,
        }
    }

    /// Sets how far back the publication window reaches.
    #[must_use]
    pub const fn window(mut self, window: NewsWindow) -> Self {
        self.window = window;
        self
    }

    /// Sets the maximum number of articles to return.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Pins the date treated as "today". Defaults to the current local date.
    #[must_use]
    pub const fn as_of(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Executes the search.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::Upstream`] on a non-success status and
    /// [`AlertError::DataShape`] when the response has no article list.
    #[tracing::instrument(skip(self), err, fields(query = %self.query, days_back = self.window.days_back))]
    pub async fn fetch(self) -> Result<Vec<Article>, AlertError> {
        let today = self
            .today
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let articles = api::fetch_everything(
            &self.client,
            &self.query,
            &self.api_key,
            self.window,
            today,
            self.limit,
        )
        .await?;
        tracing::info!(count = articles.len(), "fetched headlines");
        Ok(articles)
    }
}

/// Fetches up to three headlines mentioning `company` in their title, published today.
pub async fn fetch_headlines(
    client: &AlertClient,
    company: &str,
    api_key: &str,
) -> Result<Vec<Article>, AlertError> {
    NewsBuilder::new(client, company, api_key).fetch().await
}
