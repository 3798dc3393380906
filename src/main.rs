use std::process::ExitCode;

use stock_alert::{AlertClient, AlertError, Config, StockAlert, TwilioNotifier};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry.with(fmt::layer().with_target(false)).init();
    }
}

/// `outer: inner: root`, following `Error::source`. A cause already quoted
/// by its parent's message is not repeated.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut chain = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let msg = cause.to_string();
        if !chain.ends_with(&msg) {
            chain.push_str(": ");
            chain.push_str(&msg);
        }
        source = cause.source();
    }
    chain
}

async fn run() -> Result<(), AlertError> {
    let config = Config::from_env()?;
    tracing::debug!(?config, "loaded config");

    let client = AlertClient::builder()
        .timeout(config.http_timeout)
        .build()?;
    let notifier = TwilioNotifier::from_config(&client, &config);

    let report = StockAlert::new(&client, &config, notifier).run().await?;
    tracing::info!(
        symbol = %config.symbol,
        percent = report.change.percent(),
        articles = report.articles,
        sent = report.delivered.len(),
        failed = report.failures.len(),
        "done"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // A missing .env is fine; the variables may come from the real environment.
    let _ = dotenvy::dotenv();
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %error_chain(&e), "stock alert failed");
            ExitCode::FAILURE
        }
    }
}
