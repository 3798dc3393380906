use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::{AlertClient, AlertError, net};
use crate::quotes::model::{DailyBar, LatestCloses, Quote, TimeSeries};
use crate::quotes::wire::{BarNode, DailyEnvelope};

pub(crate) const PROVIDER: &str = "alphavantage";
pub(crate) const FUNCTION_DAILY: &str = "TIME_SERIES_DAILY";

pub(super) async fn fetch_daily(
    client: &AlertClient,
    symbol: &str,
    api_key: &str,
) -> Result<TimeSeries, AlertError> {
    let mut url = client.base_quote().clone();
    url.query_pairs_mut()
        .append_pair("function", FUNCTION_DAILY)
        .append_pair("symbol", symbol)
        .append_pair("apikey", api_key);

    let resp = client.http().get(url).send().await?;
    net::ensure_success(&resp, PROVIDER)?;

    let body = net::get_text(resp, "time_series_daily", symbol, "json").await?;
    decode_daily(&body)
}

pub(crate) fn decode_daily(body: &str) -> Result<TimeSeries, AlertError> {
    let parsed: DailyEnvelope = serde_json::from_str(body)
        .map_err(|e| AlertError::DataShape(format!("json parse error: {e}")))?;

    if let Some(msg) = parsed
        .error_message
        .or(parsed.note)
        .or(parsed.information)
    {
        return Err(AlertError::DataShape(format!("alphavantage error: {msg}")));
    }

    let series = parsed
        .series
        .ok_or_else(|| AlertError::DataShape("missing Time Series (Daily)".into()))?;

    let mut bars = series
        .into_iter()
        .map(|(day, node)| decode_bar(&day, node))
        .collect::<Result<Vec<_>, _>>()?;
    // Keys are ISO dates; newest first matches the provider's own order.
    bars.sort_by(|a, b| b.date.cmp(&a.date));

    let (symbol, last_refreshed, time_zone) = match parsed.meta {
        Some(m) => (m.symbol, m.last_refreshed, m.time_zone),
        None => (None, None, None),
    };

    Ok(TimeSeries {
        symbol,
        last_refreshed,
        time_zone,
        bars,
    })
}

fn decode_bar(day: &str, node: BarNode) -> Result<DailyBar, AlertError> {
    let date = NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|e| AlertError::DataShape(format!("bad series date `{day}`: {e}")))?;
    Ok(DailyBar {
        date,
        open: parse_price(node.open.as_deref()),
        high: parse_price(node.high.as_deref()),
        low: parse_price(node.low.as_deref()),
        close: parse_price(node.close.as_deref()),
        volume: node.volume.as_deref().and_then(|v| v.trim().parse().ok()),
    })
}

fn parse_price(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(|s| s.trim().parse::<Decimal>().ok())
}

pub(super) fn latest_two(series: &TimeSeries) -> Result<LatestCloses, AlertError> {
    let [recent, previous, ..] = series.bars.as_slice() else {
        return Err(AlertError::DataShape(format!(
            "need two daily closes, got {}",
            series.bars.len()
        )));
    };
    Ok(LatestCloses {
        recent: to_quote(recent)?,
        previous: to_quote(previous)?,
    })
}

fn to_quote(bar: &DailyBar) -> Result<Quote, AlertError> {
    let close = bar.close.ok_or_else(|| {
        AlertError::DataShape(format!("missing or non-numeric close for {}", bar.date))
    })?;
    Ok(Quote {
        date: bar.date,
        close,
    })
}
