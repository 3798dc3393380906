use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One day's closing price for the tracked stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    /// The trading day.
    pub date: NaiveDate,
    /// The closing price on that day.
    pub close: Decimal,
}

/// One row of the daily series. Price fields the provider omitted or sent
/// as non-numbers are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyBar {
    pub date: NaiveDate,
    pub open: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub close: Option<Decimal>,
    pub volume: Option<u64>,
}

/// The daily series for one symbol, most recent day first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeries {
    /// Symbol echoed back by the provider, if any.
    pub symbol: Option<String>,
    /// Last refresh stamp as sent by the provider (a date or date-time string).
    pub last_refreshed: Option<String>,
    /// Exchange time zone name, e.g. `US/Eastern`.
    pub time_zone: Option<String>,
    pub bars: Vec<DailyBar>,
}

/// The two closes a change is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LatestCloses {
    /// The most recent close.
    pub recent: Quote,
    /// The close of the trading day before it.
    pub previous: Quote,
}
