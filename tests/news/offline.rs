use chrono::NaiveDate;
use httpmock::Method::GET;
use httpmock::MockServer;
use stock_alert::{AlertError, NewsBuilder, NewsWindow, fetch_headlines};

use crate::common::{self, COMPANY, NEWS_KEY};

fn may_third() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()
}

#[tokio::test]
async fn offline_news_keeps_first_three_in_provider_order() {
    let server = MockServer::start();
    let mock = common::mock_news(
        &server,
        COMPANY,
        "2024-05-03",
        common::fixture("news_everything", COMPANY, "json"),
    );
    let client = common::client_for(&server);

    let articles = NewsBuilder::new(&client, COMPANY, NEWS_KEY)
        .as_of(may_third())
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(articles.len(), 3);
    assert_eq!(
        articles[0].title,
        "Rivian shares jump after quarterly deliveries top estimates"
    );
    assert_eq!(articles[1].source.as_deref(), Some("CNBC"));
    // The third fixture article has a null description.
    assert_eq!(articles[2].description, None);
    assert!(articles.iter().all(|a| a.published_at.is_some()));
}

#[tokio::test]
async fn offline_news_empty_result_is_not_an_error() {
    let server = MockServer::start();
    let mock = common::mock_news(
        &server,
        COMPANY,
        "2024-05-03",
        common::fixture("news_everything", "empty", "json"),
    );
    let client = common::client_for(&server);

    let articles = NewsBuilder::new(&client, COMPANY, NEWS_KEY)
        .as_of(may_third())
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert!(articles.is_empty());
}

#[tokio::test]
async fn offline_news_builder_widens_window_and_limit() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/v2/everything")
            .query_param("q", COMPANY)
            .query_param("from", "2024-04-26")
            .query_param("to", "2024-05-03")
            .query_param("searchIn", "title");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news_everything", COMPANY, "json"));
    });
    let client = common::client_for(&server);

    let articles = NewsBuilder::new(&client, COMPANY, NEWS_KEY)
        .window(NewsWindow::days(7))
        .limit(5)
        .as_of(may_third())
        .fetch()
        .await
        .unwrap();
    mock.assert();

    assert_eq!(articles.len(), 5);
}

#[tokio::test]
async fn offline_news_unauthorized_maps_to_upstream() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid or incorrect."}"#);
    });
    let client = common::client_for(&server);

    let err = NewsBuilder::new(&client, COMPANY, NEWS_KEY)
        .as_of(may_third())
        .fetch()
        .await
        .unwrap_err();
    mock.assert();

    match err {
        AlertError::Upstream {
            provider,
            status,
            url,
        } => {
            assert_eq!(provider, "newsapi");
            assert_eq!(status, 401);
            assert!(!url.contains(NEWS_KEY));
        }
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn offline_news_missing_article_list_is_data_shape() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/v2/everything");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"status":"ok","totalResults":0}"#);
    });
    let client = common::client_for(&server);

    let err = NewsBuilder::new(&client, COMPANY, NEWS_KEY)
        .as_of(may_third())
        .fetch()
        .await
        .unwrap_err();
    mock.assert();

    assert!(matches!(err, AlertError::DataShape(_)), "got {err:?}");
}

#[tokio::test]
async fn offline_headlines_for_today() {
    let today = chrono::Local::now()
        .date_naive()
        .format("%Y-%m-%d")
        .to_string();
    let server = MockServer::start();
    let mock = common::mock_news(
        &server,
        COMPANY,
        &today,
        common::fixture("news_everything", COMPANY, "json"),
    );
    let client = common::client_for(&server);

    let articles = fetch_headlines(&client, COMPANY, NEWS_KEY).await.unwrap();
    mock.assert();

    assert_eq!(articles.len(), 3);
    assert_eq!(articles[1].source.as_deref(), Some("CNBC"));
}
