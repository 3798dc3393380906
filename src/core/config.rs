//! Run configuration, sourced from the environment.

use std::fmt;
use std::time::Duration;

use crate::core::AlertError;

/// Ticker tracked when `STOCK_SYMBOL` is unset.
pub const DEFAULT_SYMBOL: &str = "RIVN";
/// Company searched for when `COMPANY_NAME` is unset.
pub const DEFAULT_COMPANY: &str = "Rivian";

/// Everything one run needs: credentials, identities and tuning knobs.
///
/// Built once per process and passed explicitly to the components that need it.
#[derive(Clone)]
pub struct Config {
    /// Ticker symbol sent to the quote provider.
    pub symbol: String,
    /// Company name used as the news search text.
    pub company_name: String,
    /// Alpha Vantage API key.
    pub alpha_vantage_key: String,
    /// NewsAPI key.
    pub news_api_key: String,
    /// Twilio account SID, also the basic-auth user.
    pub twilio_account_sid: String,
    /// Twilio auth token.
    pub twilio_auth_token: String,
    /// Sender identity (a Twilio number or messaging service).
    pub twilio_from: String,
    /// Recipient phone number.
    pub twilio_to: String,
    /// How many days before today the news search starts. `0` searches today only.
    pub news_window_days: u32,
    /// Overall HTTP request timeout.
    pub http_timeout: Duration,
}

impl Config {
    /// Load from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`AlertError::Config`] naming the first missing or malformed variable.
    pub fn from_env() -> Result<Self, AlertError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary lookup, so tests need not touch the real environment.
    ///
    /// Empty and whitespace-only values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AlertError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let required = |key: &'static str| {
            get(key).ok_or_else(|| AlertError::Config {
                var: key,
                reason: "missing".into(),
            })
        };

        Ok(Self {
            alpha_vantage_key: required("ALPHA_VANTAGE_KEY")?,
            news_api_key: required("NEWS_API_KEY")?,
            twilio_account_sid: required("TWILIO_ACCOUNT_SID")?,
            twilio_auth_token: required("TWILIO_AUTH_TOKEN")?,
            twilio_from: required("TWILIO_FROM")?,
            twilio_to: required("TWILIO_TO")?,
            symbol: get("STOCK_SYMBOL").unwrap_or_else(|| DEFAULT_SYMBOL.to_string()),
            company_name: get("COMPANY_NAME").unwrap_or_else(|| DEFAULT_COMPANY.to_string()),
            news_window_days: parse_number("NEWS_WINDOW_DAYS", get("NEWS_WINDOW_DAYS"), 0)?,
            http_timeout: timeout_secs(get("HTTP_TIMEOUT_SECS"))?,
        })
    }
}

fn timeout_secs(raw: Option<String>) -> Result<Duration, AlertError> {
    match parse_number::<u64>("HTTP_TIMEOUT_SECS", raw, 10)? {
        0 => Err(AlertError::Config {
            var: "HTTP_TIMEOUT_SECS",
            reason: "must be at least 1 second".into(),
        }),
        secs => Ok(Duration::from_secs(secs)),
    }
}

fn parse_number<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, AlertError>
where
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(s) => s.parse().map_err(|e: T::Err| AlertError::Config {
            var,
            reason: format!("`{s}` is not a valid number: {e}"),
        }),
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("symbol", &self.symbol)
            .field("company_name", &self.company_name)
            .field("alpha_vantage_key", &"<redacted>")
            .field("news_api_key", &"<redacted>")
            .field("twilio_account_sid", &self.twilio_account_sid)
            .field("twilio_auth_token", &"<redacted>")
            .field("twilio_from", &self.twilio_from)
            .field("twilio_to", &self.twilio_to)
            .field("news_window_days", &self.news_window_days)
            .field("http_timeout", &self.http_timeout)
            .finish()
    }
}
