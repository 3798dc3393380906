#[cfg(feature = "test-mode")]
use std::env;

use url::Url;

use crate::core::AlertError;

/// Read the response body as text.
/// In `test-mode`, if `SA_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("SA_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            tracing::warn!(key = _key, error = %e, "SA_RECORD: failed to write fixture");
        }
    }

    Ok(text)
}

/// Strip the query string (which carries API keys) so a URL is safe to log.
pub(crate) fn redact(url: &Url) -> String {
    let mut clean = url.clone();
    clean.set_query(None);
    clean.set_fragment(None);
    clean.to_string()
}

/// Map a non-2xx response to [`AlertError::Upstream`].
pub(crate) fn ensure_success(
    resp: &reqwest::Response,
    provider: &'static str,
) -> Result<(), AlertError> {
    if !resp.status().is_success() {
        return Err(AlertError::Upstream {
            provider,
            status: resp.status().as_u16(),
            url: redact(resp.url()),
        });
    }
    Ok(())
}
