//! Phish Guard - native messaging host entry point

use std::sync::Arc;

use anyhow::Context;
use phish_guard::constants::{APP_NAME, APP_VERSION};
use phish_guard::{Bridge, GuardConfig, HttpClassifier, NativeHost, Notifier};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout carries the protocol, so logs must stay on stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = GuardConfig::from_env();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);
    log::info!("Classification endpoint: {}", config.endpoint);

    let classifier = HttpClassifier::new(&config)
        .context("Failed to create classification client")?;

    match classifier.probe().await {
        Ok(status) => log::info!("Classification service reachable (HTTP {})", status),
        Err(e) => log::warn!("Classification service not reachable yet: {}", e),
    }

    let host = NativeHost::new(tokio::io::stdout(), config.host_call_timeout());
    let notifier = Arc::new(Notifier::new(host, classifier, config.icon_url.clone()));
    let bridge = Bridge::new(notifier, config.max_incoming_bytes);

    bridge.run(tokio::io::stdin())
        .await
        .context("Native messaging channel failed")?;

    log::info!("Browser closed the channel, shutting down");
    Ok(())
}
