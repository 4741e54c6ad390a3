//! Event consumer composition root.
//!
//! Independent process that reads published todo events and logs them.

use tracing_subscriber::EnvFilter;

use todo_relay::adapters::kafka::TodoEventConsumer;
use todo_relay::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let consumer = TodoEventConsumer::new(&config.kafka)?;
    tracing::info!("start consuming todo events");

    if let Err(err) = consumer.run().await {
        tracing::error!(error = %err, "error while reading events from broker");
        return Err(err.into());
    }

    Ok(())
}
