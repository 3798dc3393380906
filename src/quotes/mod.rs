//! Daily closing prices from Alpha Vantage.

mod api;
mod model;
mod wire;

pub use model::{DailyBar, LatestCloses, Quote, TimeSeries};

use crate::core::{AlertClient, AlertError};

/// Fetches the `TIME_SERIES_DAILY` series for `symbol`.
///
/// # Errors
///
/// Returns [`AlertError::Upstream`] on a non-success status and
/// [`AlertError::DataShape`] if the body is not a daily series (including the
/// provider's in-band error and throttling notes).
#[tracing::instrument(skip(client, api_key), err)]
pub async fn fetch_daily_series(
    client: &AlertClient,
    symbol: &str,
    api_key: &str,
) -> Result<TimeSeries, AlertError> {
    let series = api::fetch_daily(client, symbol, api_key).await?;
    tracing::debug!(bars = series.bars.len(), "fetched daily series");
    Ok(series)
}

/// Picks the two most recent closes out of a series.
///
/// # Errors
///
/// Returns [`AlertError::DataShape`] when fewer than two days are present or
/// either close is missing or not a number.
pub fn latest_two_closes(series: &TimeSeries) -> Result<LatestCloses, AlertError> {
    api::latest_two(series)
}
