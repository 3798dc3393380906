use stock_alert::{AlertClient, fetch_daily_series, latest_two_closes};

#[tokio::test]
#[ignore = "exercise live Alpha Vantage API (needs ALPHA_VANTAGE_KEY)"]
async fn live_daily_series_has_two_closes() {
    let _ = dotenvy::dotenv();
    let key = std::env::var("ALPHA_VANTAGE_KEY").expect("ALPHA_VANTAGE_KEY");

    let client = AlertClient::default();
    let series = fetch_daily_series(&client, "RIVN", &key).await.unwrap();
    let closes = latest_two_closes(&series).unwrap();

    assert!(closes.recent.date > closes.previous.date);
}
