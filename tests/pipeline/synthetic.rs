use chrono::NaiveDate;
use httpmock::MockServer;
use serde_json::{Value, json};
use stock_alert::{AlertError, Direction, StockAlert};

use crate::common::{self, COMPANY, RecordingNotifier, SYMBOL};

fn may_third() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()
}

/// A daily series body with the given `(date, close)` rows.
fn daily_body(rows: &[(&str, &str)]) -> String {
    let series: serde_json::Map<String, Value> = rows
        .iter()
        .map(|(day, close)| {
            (
                day.to_string(),
                json!({
                    "1. open": close,
                    "2. high": close,
                    "3. low": close,
                    "4. close": close,
                    "5. volume": "1000"
                }),
            )
        })
        .collect();
    json!({
        "Meta Data": { "2. Symbol": SYMBOL },
        "Time Series (Daily)": series
    })
    .to_string()
}

fn news_body(count: usize) -> String {
    let articles: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "source": { "id": null, "name": "Synthetic" },
                "title": format!("Headline {i}"),
                "description": format!("Brief {i}"),
                "url": format!("https://news.example.com/{i}"),
                "publishedAt": "2024-05-03T12:00:00Z"
            })
        })
        .collect();
    json!({ "status": "ok", "totalResults": count, "articles": articles }).to_string()
}

async fn run_with(
    daily: String,
    news: Option<String>,
    notifier: RecordingNotifier,
) -> (Result<stock_alert::RunReport, AlertError>, Vec<String>) {
    let server = MockServer::start();
    let _daily = common::mock_daily(&server, SYMBOL, daily);
    let _news = news.map(|body| common::mock_news(&server, COMPANY, "2024-05-03", body));

    let client = common::client_for(&server);
    let cfg = common::test_config();
    let alert = StockAlert::new(&client, &cfg, notifier).as_of(may_third());
    let result = alert.run().await;
    let sent = alert.notifier().messages();
    (result, sent)
}

#[tokio::test]
async fn rise_of_twenty_percent_is_up() {
    let (result, sent) = run_with(
        daily_body(&[("2024-05-03", "120.0"), ("2024-05-02", "100.0")]),
        Some(news_body(1)),
        RecordingNotifier::default(),
    )
    .await;

    let report = result.unwrap();
    assert_eq!(report.change.percent(), 20.0);
    assert_eq!(report.change.direction(), Direction::Up);
    assert_eq!(
        sent,
        ["RIVN🔺20%\r\nHeadline: \r\nHeadline 1\r\nBrief: \r\nBrief 1"]
    );
}

#[tokio::test]
async fn fall_of_ten_percent_is_down_without_sign() {
    let (result, sent) = run_with(
        daily_body(&[("2024-05-03", "90.0"), ("2024-05-02", "100.0")]),
        Some(news_body(1)),
        RecordingNotifier::default(),
    )
    .await;

    let report = result.unwrap();
    assert_eq!(report.change.percent(), -10.0);
    assert_eq!(report.change.direction(), Direction::Down);
    assert!(sent[0].starts_with("RIVN🔻10%\r\n"));
}

#[tokio::test]
async fn five_articles_send_exactly_the_first_three() {
    let (result, sent) = run_with(
        daily_body(&[("2024-05-03", "101.0"), ("2024-05-02", "100.0")]),
        Some(news_body(5)),
        RecordingNotifier::default(),
    )
    .await;

    let report = result.unwrap();
    assert_eq!(report.articles, 3);
    assert_eq!(sent.len(), 3);
    for (i, msg) in sent.iter().enumerate() {
        assert_eq!(
            msg,
            &format!(
                "RIVN🔺1%\r\nHeadline: \r\nHeadline {n}\r\nBrief: \r\nBrief {n}",
                n = i + 1
            )
        );
    }
}

#[tokio::test]
async fn zero_articles_is_a_successful_quiet_run() {
    let (result, sent) = run_with(
        daily_body(&[("2024-05-03", "101.0"), ("2024-05-02", "100.0")]),
        Some(news_body(0)),
        RecordingNotifier::default(),
    )
    .await;

    let report = result.unwrap();
    assert_eq!(report.articles, 0);
    assert_eq!(report.attempted(), 0);
    assert!(sent.is_empty());
}

#[tokio::test]
async fn single_quote_fails_before_news_or_sends() {
    // No news mock: reaching the news stage would surface as Upstream, not DataShape.
    let (result, sent) = run_with(
        daily_body(&[("2024-05-03", "101.0")]),
        None,
        RecordingNotifier::default(),
    )
    .await;

    assert!(
        matches!(result, Err(AlertError::DataShape(_))),
        "expected DataShape, got {result:?}"
    );
    assert!(sent.is_empty());
}

#[tokio::test]
async fn zero_previous_close_is_a_division_error() {
    let (result, sent) = run_with(
        daily_body(&[("2024-05-03", "3.0"), ("2024-05-02", "0.0")]),
        None,
        RecordingNotifier::default(),
    )
    .await;

    assert!(matches!(result, Err(AlertError::Division)), "got {result:?}");
    assert!(sent.is_empty());
}

#[tokio::test]
async fn failed_send_does_not_stop_the_rest() {
    let (result, sent) = run_with(
        daily_body(&[("2024-05-03", "101.0"), ("2024-05-02", "100.0")]),
        Some(news_body(3)),
        RecordingNotifier::failing_on(vec![1]),
    )
    .await;

    let report = result.unwrap();
    assert_eq!(sent.len(), 3);
    assert_eq!(report.delivered.len(), 2);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].is_delivery());
    assert_eq!(report.attempted(), 3);
}
