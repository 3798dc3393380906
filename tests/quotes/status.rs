use httpmock::Method::GET;
use httpmock::MockServer;
use std::time::Duration;
use stock_alert::{AlertClient, AlertError, fetch_daily_series};
use url::Url;

use crate::common::{self, QUOTE_KEY};

#[tokio::test]
async fn daily_series_returns_upstream_error_on_non_2xx() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("symbol", "FAIL");
        then.status(503).body("Service Unavailable");
    });

    let client = common::client_for(&server);
    let err = fetch_daily_series(&client, "FAIL", QUOTE_KEY)
        .await
        .unwrap_err();
    mock.assert();

    match err {
        AlertError::Upstream {
            provider,
            status,
            url,
        } => {
            assert_eq!(provider, "alphavantage");
            assert_eq!(status, 503);
            assert!(url.ends_with("/query"));
            assert!(!url.contains(QUOTE_KEY), "api key leaked into error: {url}");
        }
        other => panic!("expected Upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn daily_series_rejects_non_json_body() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200)
            .header("content-type", "text/html")
            .body("<html>maintenance</html>");
    });

    let client = common::client_for(&server);
    let err = fetch_daily_series(&client, "RIVN", QUOTE_KEY)
        .await
        .unwrap_err();
    mock.assert();

    assert!(
        matches!(err, AlertError::DataShape(_)),
        "expected DataShape error, got {err:?}"
    );
}

#[tokio::test]
async fn transport_error_does_not_carry_api_key() {
    // Nothing listens on the discard port.
    let client = AlertClient::builder()
        .base_quote(Url::parse("http://127.0.0.1:9/query").unwrap())
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = fetch_daily_series(&client, "RIVN", "SECRETKEY")
        .await
        .unwrap_err();

    assert!(matches!(err, AlertError::Http(_)), "expected Http error, got {err:?}");
    assert!(!err.to_string().contains("SECRETKEY"), "api key leaked: {err}");
    assert!(!format!("{err:?}").contains("SECRETKEY"), "api key leaked: {err:?}");
}
