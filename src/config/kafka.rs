//! Kafka configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Kafka configuration
#[derive(Debug, Clone, Deserialize)]
pub struct KafkaConfig {
    /// Comma-separated broker addresses (e.g. "localhost:9092")
    pub brokers: String,

    /// Topic the todo events are published to and consumed from
    pub topic: String,

    /// Consumer group for the event consumer
    #[serde(default = "default_consumer_group")]
    pub consumer_group: String,

    /// Producer acknowledgment mode: "0", "1", or "all"
    #[serde(default = "default_acks")]
    pub acks: String,

    /// Producer send timeout in milliseconds
    #[serde(default = "default_send_timeout_ms")]
    pub send_timeout_ms: u64,
}

impl KafkaConfig {
    /// Get the send timeout as a Duration
    pub fn send_timeout(&self) -> Duration {
        Duration::from_millis(self.send_timeout_ms)
    }

    /// Validate Kafka configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.brokers.is_empty() {
            return Err(ValidationError::MissingRequired("KAFKA_BROKERS"));
        }
        if self.topic.is_empty() {
            return Err(ValidationError::MissingRequired("KAFKA_TOPIC"));
        }
        if self.consumer_group.is_empty() {
            return Err(ValidationError::MissingRequired("KAFKA_CONSUMER_GROUP"));
        }
        if !matches!(self.acks.as_str(), "0" | "1" | "all") {
            return Err(ValidationError::InvalidKafkaAcks);
        }
        if self.send_timeout_ms == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_consumer_group() -> String {
    "todo-consumer".to_string()
}

fn default_acks() -> String {
    "1".to_string()
}

fn default_send_timeout_ms() -> u64 {
    5000
}
