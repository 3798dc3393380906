//! Centralized constants for default endpoints and UA.

/// Identifies this program to the providers.
pub(crate) const USER_AGENT: &str = concat!("stock-alert/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage query endpoint.
pub(crate) const DEFAULT_BASE_QUOTE: &str = "https://www.alphavantage.co/query";

/// NewsAPI "everything" search endpoint.
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://newsapi.org/v2/everything";

/// Twilio REST API root; the account path is appended per request.
pub(crate) const DEFAULT_BASE_MESSAGING: &str = "https://api.twilio.com/";

/// Overall request timeout when none is configured.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Connect timeout when none is configured.
pub(crate) const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
