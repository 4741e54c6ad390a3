//! Kafka implementation of EventPublisher.
//!
//! Events are serialized as JSON and keyed by todo id, so transports that
//! partition by key preserve per-todo ordering. A failed send surfaces as a
//! `PublishError`; the caller does not retry.

use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::error::KafkaError;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;

use crate::config::KafkaConfig;
use crate::domain::{PublishError, TodoEvent};
use crate::ports::EventPublisher;

/// Kafka-backed event publisher.
pub struct KafkaEventPublisher {
    producer: FutureProducer,
    topic: String,
    timeout: Duration,
}

impl KafkaEventPublisher {
    /// Creates a producer from configuration.
    ///
    /// # Errors
    ///
    /// Returns a `KafkaError` when the producer cannot be created from the
    /// configured broker addresses.
    pub fn new(config: &KafkaConfig) -> Result<Self, KafkaError> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", config.send_timeout_ms.to_string())
            .set("acks", &config.acks)
            .create()?;

        tracing::info!(
            brokers = %config.brokers,
            topic = %config.topic,
            acks = %config.acks,
            "Kafka producer created"
        );

        Ok(Self {
            producer,
            topic: config.topic.clone(),
            timeout: config.send_timeout(),
        })
    }
}

#[async_trait]
impl EventPublisher for KafkaEventPublisher {
    async fn publish(&self, event: &TodoEvent) -> Result<(), PublishError> {
        let payload = serde_json::to_vec(event)
            .map_err(|e| PublishError::new("failed to serialize event", e))?;
        let key = event.key();

        let record = FutureRecord::to(&self.topic).payload(&payload).key(&key);

        match self.producer.send(record, Timeout::After(self.timeout)).await {
            Ok((partition, offset)) => {
                tracing::debug!(
                    topic = %self.topic,
                    key = %key,
                    partition = partition,
                    offset = offset,
                    "event published"
                );
                Ok(())
            }
            Err((kafka_error, _)) => {
                tracing::error!(
                    topic = %self.topic,
                    key = %key,
                    error = %kafka_error,
                    "failed to publish event"
                );
                Err(PublishError::new(
                    "failed to deliver event to broker",
                    kafka_error,
                ))
            }
        }
    }
}
