use chrono::NaiveDate;

use crate::{
    core::{AlertClient, AlertError, net},
    news::{
        model::{Article, NewsWindow},
        wire,
    },
};

pub(crate) const PROVIDER: &str = "newsapi";
const DATE_FMT: &str = "%Y-%m-%d";

pub(super) async fn fetch_everything(
    client: &AlertClient,
    query: &str,
    api_key: &str,
    window: NewsWindow,
    today: NaiveDate,
    limit: usize,
) -> Result<Vec<Article>, AlertError> {
    let (from, to) = window.bounds(today);

    let mut url = client.base_news().clone();
    url.query_pairs_mut()
        .append_pair("q", query)
        .append_pair("apiKey", api_key)
        .append_pair("from", &from.format(DATE_FMT).to_string())
        .append_pair("to", &to.format(DATE_FMT).to_string())
        .append_pair("searchIn", "title");

    let resp = client.http().get(url).send().await?;

    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let clean = net::redact(resp.url());
        // Best effort: the body only feeds the log line.
        if let Ok(body) = resp.text().await
            && let Ok(err) = serde_json::from_str::<wire::ErrorBody>(&body)
        {
            tracing::warn!(
                status,
                code = err.code.as_deref().unwrap_or(""),
                message = err.message.as_deref().unwrap_or(""),
                "newsapi rejected the search"
            );
        }
        return Err(AlertError::Upstream {
            provider: PROVIDER,
            status,
            url: clean,
        });
    }

    let body = net::get_text(resp, "news_everything", query, "json").await?;
    decode_everything(&body, limit)
}

pub(crate) fn decode_everything(body: &str, limit: usize) -> Result<Vec<Article>, AlertError> {
    let envelope: wire::EverythingEnvelope = serde_json::from_str(body)
        .map_err(|e| AlertError::DataShape(format!("json parse error: {e}")))?;

    if envelope.status.as_deref() == Some("error") {
        return Err(AlertError::DataShape(format!(
            "newsapi error: {} - {}",
            envelope.code.unwrap_or_default(),
            envelope.message.unwrap_or_default()
        )));
    }

    let articles = envelope
        .articles
        .ok_or_else(|| AlertError::DataShape("missing articles".into()))?;

    tracing::debug!(
        total = envelope.total_results.unwrap_or(articles.len() as u64),
        keep = limit,
        "decoded news search"
    );

    // Provider order, no filtering.
    let results = articles
        .into_iter()
        .take(limit)
        .map(|raw| Article {
            title: raw.title.unwrap_or_default(),
            description: raw.description,
            source: raw.source.and_then(|s| s.name),
            url: raw.url,
            published_at: raw.published_at.as_deref().and_then(|s| {
                chrono::DateTime::parse_from_rfc3339(s)
                    .ok()
                    .map(|dt| dt.with_timezone(&chrono::Utc))
            }),
        })
        .collect();

    Ok(results)
}
