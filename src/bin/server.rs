//! HTTP server composition root.
//!
//! Builds the process-wide resources (connection pool, Kafka producer) once,
//! wires them into the service through its port dependencies, and serves the
//! todo API.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use todo_relay::adapters::http::{todo_router, TodoAppState};
use todo_relay::adapters::kafka::KafkaEventPublisher;
use todo_relay::adapters::postgres::PostgresTodoRepository;
use todo_relay::config::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;
    tracing::info!("connected to database");

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("migrations applied");
    }

    let repository = Arc::new(PostgresTodoRepository::new(pool));
    let publisher = Arc::new(KafkaEventPublisher::new(&config.kafka)?);
    let state = TodoAppState::new(repository, publisher);

    let app = todo_router()
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(config.server.request_timeout()))
        .with_state(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening for http requests");

    axum::serve(listener, app).await?;

    Ok(())
}
