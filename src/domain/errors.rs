//! Error types for the domain layer.
//!
//! Two narrow error types belong to the ports (`RepositoryError`,
//! `PublishError`); `TodoError` is the service-level taxonomy the API
//! boundary classifies into status codes.

use thiserror::Error;

use super::todo::Todo;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Errors surfaced by the persistence port.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested identifier has no corresponding record.
    #[error("no todo with id {0}")]
    NotFound(i64),

    /// Any other storage failure.
    #[error("storage failure: {0}")]
    Storage(#[source] BoxedError),
}

impl RepositoryError {
    /// Wraps an underlying store error.
    pub fn storage(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        RepositoryError::Storage(Box::new(source))
    }
}

/// Error surfaced by the event publisher port.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PublishError {
    pub message: String,
    #[source]
    pub source: Option<BoxedError>,
}

impl PublishError {
    pub fn new(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }
}

/// The service-level error taxonomy.
///
/// Each variant carries a human-readable message; infrastructure variants
/// keep the wrapped cause. The API adapter maps variants exhaustively onto
/// boundary statuses.
#[derive(Debug, Error)]
pub enum TodoError {
    /// Caller input violates a stated constraint. Maps to 400.
    #[error("{0}")]
    Validation(String),

    /// The requested identifier has no corresponding record. Maps to 404.
    #[error("{0}")]
    NotFound(String),

    /// Persistence succeeded but the notification could not be sent.
    ///
    /// Carries the committed snapshot: the record exists even though no
    /// event was observed by consumers. Maps to 500.
    #[error("{message}")]
    EventPublish {
        message: String,
        todo: Todo,
        #[source]
        source: PublishError,
    },

    /// Any other persistence or infrastructure failure. Maps to 500.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Option<BoxedError>,
    },
}

impl TodoError {
    /// Persistence succeeded, publication failed.
    pub fn event_publish(todo: Todo, source: PublishError) -> Self {
        TodoError::EventPublish {
            message: "failed to publish event".to_string(),
            todo,
            source,
        }
    }

    /// Wraps an infrastructure failure.
    pub fn internal(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TodoError::Internal {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
