//! Public client surface + builder.
//! Default endpoints and the UA live in `constants`.

mod constants;

use crate::core::AlertError;
use constants::{
    DEFAULT_BASE_MESSAGING, DEFAULT_BASE_NEWS, DEFAULT_BASE_QUOTE, DEFAULT_CONNECT_TIMEOUT_SECS,
    DEFAULT_TIMEOUT_SECS, USER_AGENT,
};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Holds the configured HTTP client and the base URL of every provider.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct AlertClient {
    http: Client,
    base_quote: Url,
    base_news: Url,
    base_messaging: Url,
}

impl Default for AlertClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl AlertClient {
    /// Create a new builder.
    pub fn builder() -> AlertClientBuilder {
        AlertClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_quote(&self) -> &Url {
        &self.base_quote
    }
    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
    pub(crate) fn base_messaging(&self) -> &Url {
        &self.base_messaging
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct AlertClientBuilder {
    user_agent: Option<String>,
    base_quote: Option<Url>,
    base_news: Option<Url>,
    base_messaging: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl AlertClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quote endpoint (e.g., `https://www.alphavantage.co/query`).
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Override the news search endpoint (e.g., `https://newsapi.org/v2/everything`).
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the messaging API root (e.g., `https://api.twilio.com/`).
    /// A missing trailing slash is added.
    pub fn base_messaging(mut self, url: Url) -> Self {
        self.base_messaging = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: 10s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: 5s.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<AlertClient, AlertError> {
        let base_quote = self.base_quote.unwrap_or(Url::parse(DEFAULT_BASE_QUOTE)?);
        let base_news = self.base_news.unwrap_or(Url::parse(DEFAULT_BASE_NEWS)?);
        let base_messaging = with_trailing_slash(
            self.base_messaging
                .unwrap_or(Url::parse(DEFAULT_BASE_MESSAGING)?),
        );

        let http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(
                self.timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            )
            .connect_timeout(
                self.connect_timeout
                    .unwrap_or(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)),
            )
            .build()?;

        Ok(AlertClient {
            http,
            base_quote,
            base_news,
            base_messaging,
        })
    }
}

/// `Url::join` replaces the last segment unless the base ends in `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
