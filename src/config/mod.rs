//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `TODO_RELAY` prefix and nested values use double underscores as
//! separators.
//!
//! # Example
//!
//! ```no_run
//! use todo_relay::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let addr = config.server.socket_addr().expect("Invalid bind address");
//! println!("Server running on {addr}");
//! ```

mod database;
mod error;
mod kafka;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use kafka::KafkaConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL connection)
    pub database: DatabaseConfig,

    /// Kafka configuration (brokers, topic, consumer group)
    pub kafka: KafkaConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present, then reads environment variables
    /// with the `TODO_RELAY` prefix, using `__` to separate nested values:
    ///
    /// - `TODO_RELAY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `TODO_RELAY__DATABASE__URL=...` -> `database.url = ...`
    /// - `TODO_RELAY__KAFKA__BROKERS=...` -> `kafka.brokers = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TODO_RELAY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.kafka.validate()?;
        Ok(())
    }
}
