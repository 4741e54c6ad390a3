//! Event publisher port.
//!
//! Defines how the service publishes change events without knowing about
//! the underlying transport (Kafka, in-memory test double).

use async_trait::async_trait;

use crate::domain::{PublishError, TodoEvent};

/// Port for publishing todo change events.
///
/// Implementations must ensure the event eventually becomes visible to at
/// least one downstream consumer. No ordering guarantee is required beyond
/// per-key ordering where the transport provides it; the reference transport
/// partitions by todo id.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a single event.
    ///
    /// # Errors
    ///
    /// Returns `PublishError` when the transport cannot accept the event.
    /// The caller does not retry; a failed publish does not roll back the
    /// preceding write.
    async fn publish(&self, event: &TodoEvent) -> Result<(), PublishError>;
}
