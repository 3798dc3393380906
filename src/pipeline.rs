//! One run: closes, change, headlines, messages.

use chrono::NaiveDate;

use crate::change::{PriceChange, compute_change};
use crate::core::{AlertClient, AlertError, Config};
use crate::news::{DEFAULT_HEADLINE_LIMIT, NewsBuilder, NewsWindow};
use crate::notify::{Delivery, Notifier, render_alert};
use crate::quotes::{self, LatestCloses};

/// What a completed run did.
#[derive(Debug)]
pub struct RunReport {
    pub closes: LatestCloses,
    pub change: PriceChange,
    /// Headlines returned by the search (at most the headline limit).
    pub articles: usize,
    /// Receipts for the messages the provider accepted.
    pub delivered: Vec<Delivery>,
    /// Per-headline rejections by the messaging provider. These never abort the run.
    pub failures: Vec<AlertError>,
}

impl RunReport {
    /// Messages attempted, accepted or not.
    pub fn attempted(&self) -> usize {
        self.delivered.len() + self.failures.len()
    }
}

/// The alert pipeline for one stock.
///
/// Stages run strictly in order and any failure before the send loop ends
/// the run:
///
/// 1. fetch the daily series and take the two latest closes,
/// 2. compute the percent change,
/// 3. search today's headlines for the company,
/// 4. send one message per headline.
pub struct StockAlert<N> {
    client: AlertClient,
    symbol: String,
    company_name: String,
    quote_key: String,
    news_key: String,
    window: NewsWindow,
    limit: usize,
    today: Option<NaiveDate>,
    notifier: N,
}

impl<N: Notifier> StockAlert<N> {
    pub fn new(client: &AlertClient, cfg: &Config, notifier: N) -> Self {
        Self {
            client: client.clone(),
            symbol: cfg.symbol.clone(),
            company_name: cfg.company_name.clone(),
            quote_key: cfg.alpha_vantage_key.clone(),
            news_key: cfg.news_api_key.clone(),
            window: NewsWindow::days(cfg.news_window_days),
            limit: DEFAULT_HEADLINE_LIMIT,
            today: None,
            notifier,
        }
    }

    /// Pins the date the news window is counted from.
    #[must_use]
    pub fn as_of(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Runs the pipeline once.
    ///
    /// # Errors
    ///
    /// Any fetch, data-shape or division error, including one raised while
    /// sending. Provider rejections ([`AlertError::Delivery`]) are collected in
    /// [`RunReport::failures`] instead.
    #[tracing::instrument(skip(self), err, fields(symbol = %self.symbol, company = %self.company_name))]
    pub async fn run(&self) -> Result<RunReport, AlertError> {
        let series = quotes::fetch_daily_series(&self.client, &self.symbol, &self.quote_key).await?;
        let closes = quotes::latest_two_closes(&series)?;
        let change = compute_change(closes.recent.close, closes.previous.close)?;
        tracing::info!(
            recent = %closes.recent.close,
            previous = %closes.previous.close,
            percent = change.percent(),
            "computed change"
        );

        let mut search = NewsBuilder::new(&self.client, &self.company_name, &self.news_key)
            .window(self.window)
            .limit(self.limit);
        if let Some(day) = self.today {
            search = search.as_of(day);
        }
        let articles = search.fetch().await?;

        let mut delivered = Vec::with_capacity(articles.len());
        let mut failures = Vec::new();
        for article in &articles {
            let body = render_alert(&self.symbol, &change, article);
            match self.notifier.send(&body).await {
                Ok(receipt) => delivered.push(receipt),
                Err(e) if e.is_delivery() => {
                    tracing::warn!(title = %article.title, error = %e, "alert not delivered");
                    failures.push(e);
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            sent = delivered.len(),
            failed = failures.len(),
            "run complete"
        );
        Ok(RunReport {
            closes,
            change,
            articles: articles.len(),
            delivered,
            failures,
        })
    }
}
