use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::Serialize;

/// A single headline about the tracked company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// The headline. Empty if the provider sent none.
    pub title: String,
    /// The short summary, when the provider has one.
    pub description: Option<String>,
    /// The publisher's display name (e.g., "Reuters").
    pub source: Option<String>,
    /// A direct link to the article.
    pub url: Option<String>,
    pub published_at: Option<DateTime<Utc>>,
}

/// The publication-date window searched, counted back from today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NewsWindow {
    /// Days before today the window opens. `0` searches today only.
    pub days_back: u32,
}

impl NewsWindow {
    /// Today only.
    pub const TODAY: NewsWindow = NewsWindow { days_back: 0 };

    pub const fn days(days_back: u32) -> Self {
        Self { days_back }
    }

    /// Inclusive `(from, to)` dates for a search run on `today`.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let from = today
            .checked_sub_days(Days::new(u64::from(self.days_back)))
            .unwrap_or(NaiveDate::MIN);
        (from, today)
    }
}
