//! stock-alert: text yourself the news when a stock moves.
//!
//! A run fetches the two latest daily closes for one symbol from Alpha Vantage,
//! computes the percent change, searches NewsAPI for headlines about the company
//! and sends one Twilio SMS per headline:
//!
//! ```text
//! RIVN🔺4%
//! Headline: <title>
//! Brief: <description>
//! ```
//!
//! The pieces are usable on their own ([`quotes`], [`change`], [`news`],
//! [`notify`]); [`StockAlert`] wires them together.

pub mod change;
pub mod core;
pub mod news;
pub mod notify;
pub mod pipeline;
pub mod quotes;

pub use change::{Direction, PriceChange, compute_change};
pub use crate::core::{AlertClient, AlertClientBuilder, AlertError, Config};
pub use news::{Article, NewsBuilder, NewsWindow, fetch_headlines};
pub use notify::{Delivery, Notifier, TwilioNotifier, render_alert};
pub use pipeline::{RunReport, StockAlert};
pub use quotes::{
    DailyBar, LatestCloses, Quote, TimeSeries, fetch_daily_series, latest_two_closes,
};
