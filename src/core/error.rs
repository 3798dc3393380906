use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum AlertError {
    /// A required configuration value is missing or could not be parsed.
    #[error("config error: {var}: {reason}")]
    Config {
        /// The environment variable at fault.
        var: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// An error occurred during an HTTP request (connect failure, timeout, body read).
    /// Holds no request URL; the query string would carry API keys.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A provider answered with a non-success HTTP status code.
    #[error("{provider} returned status {status} at {url}")]
    Upstream {
        /// Which provider answered (`alphavantage`, `newsapi`).
        provider: &'static str,
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, without its query string.
        url: String,
    },

    /// The data received from a provider was in an unexpected format, was missing a
    /// required field, or did not hold enough entries.
    #[error("Data format unexpected or missing field: {0}")]
    DataShape(String),

    /// The previous close was zero, so no percent change exists.
    #[error("cannot compute percent change from a previous close of zero")]
    Division,

    /// The messaging provider rejected a message.
    #[error("message rejected with status {status}: {message}")]
    Delivery {
        /// The HTTP status code.
        status: u16,
        /// The provider's own error code, when it sent one.
        code: Option<i64>,
        /// The provider's error message, or the raw body.
        message: String,
    },
}

impl From<reqwest::Error> for AlertError {
    fn from(e: reqwest::Error) -> Self {
        AlertError::Http(e.without_url())
    }
}

impl AlertError {
    /// True for failures scoped to a single message rather than the whole run.
    pub fn is_delivery(&self) -> bool {
        matches!(self, AlertError::Delivery { .. })
    }
}
