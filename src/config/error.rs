//! Configuration error types

use thiserror::Error;

/// Errors that occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying config crate failure (missing variable, parse failure)
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors that occur while validating configuration values.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required configuration: {0}")]
    MissingRequired(&'static str),

    #[error("database URL must start with postgres:// or postgresql://")]
    InvalidDatabaseUrl,

    #[error("min_connections must not exceed max_connections")]
    InvalidPoolSize,

    #[error("max_connections must not exceed 100")]
    PoolSizeTooLarge,

    #[error("server host is not a valid address")]
    InvalidHost,

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("timeout must be between 1 and 300 seconds")]
    InvalidTimeout,

    #[error("kafka acks must be one of \"0\", \"1\", \"all\"")]
    InvalidKafkaAcks,
}
