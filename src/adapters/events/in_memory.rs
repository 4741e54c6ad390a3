//! In-memory event publisher for testing.
//!
//! Provides synchronous, deterministic event capture for unit and
//! integration tests. Not intended for production use; the Kafka adapter is
//! the production publisher.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::{PublishError, TodoEvent};
use crate::ports::EventPublisher;

/// Capturing publisher for tests.
///
/// Records every published event for assertions; the failing variant
/// rejects every publish to exercise the two-phase failure split.
///
/// # Panics
///
/// Methods may panic if the internal lock is poisoned. Acceptable for test
/// code; this adapter should NOT be used in production.
pub struct InMemoryEventPublisher {
    published: Mutex<Vec<TodoEvent>>,
    fail: bool,
}

impl InMemoryEventPublisher {
    /// Creates a publisher that accepts and records every event.
    pub fn new() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Creates a publisher that rejects every event.
    pub fn failing() -> Self {
        Self {
            published: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Returns all captured events (for test assertions).
    pub fn published_events(&self) -> Vec<TodoEvent> {
        self.published
            .lock()
            .expect("InMemoryEventPublisher: lock poisoned")
            .clone()
    }

    /// Returns the count of captured events.
    pub fn event_count(&self) -> usize {
        self.published
            .lock()
            .expect("InMemoryEventPublisher: lock poisoned")
            .len()
    }

    /// Clears captured events (for test isolation).
    pub fn clear(&self) {
        self.published
            .lock()
            .expect("InMemoryEventPublisher: lock poisoned")
            .clear();
    }
}

impl Default for InMemoryEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for InMemoryEventPublisher {
    async fn publish(&self, event: &TodoEvent) -> Result<(), PublishError> {
        if self.fail {
            return Err(PublishError::message("in-memory publisher set to fail"));
        }
        self.published
            .lock()
            .expect("InMemoryEventPublisher: lock poisoned")
            .push(event.clone());
        Ok(())
    }
}
