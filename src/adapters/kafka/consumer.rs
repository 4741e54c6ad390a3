//! Kafka consumer that logs every todo event it receives.
//!
//! This is the terminal sink in this codebase, standing in for any
//! downstream subscriber. Offset management stays on the client's defaults
//! (auto-commit); there is no redelivery policy here.

use rdkafka::config::ClientConfig;
use rdkafka::consumer::{Consumer, StreamConsumer};
use rdkafka::error::KafkaError;
use rdkafka::message::Message;

use crate::config::KafkaConfig;

/// Long-lived consumer loop over the todo topic.
pub struct TodoEventConsumer {
    consumer: StreamConsumer,
}

impl TodoEventConsumer {
    /// Creates a consumer in the configured group and subscribes to the
    /// todo topic.
    ///
    /// # Errors
    ///
    /// Returns a `KafkaError` when the consumer cannot be created or the
    /// subscription fails.
    pub fn new(config: &KafkaConfig) -> Result<Self, KafkaError> {
        let consumer: StreamConsumer = ClientConfig::new()
            .set("bootstrap.servers", &config.brokers)
            .set("group.id", &config.consumer_group)
            .set("auto.offset.reset", "earliest")
            .set("session.timeout.ms", "6000")
            .set("enable.partition.eof", "false")
            .create()?;

        consumer.subscribe(&[config.topic.as_str()])?;

        tracing::info!(
            brokers = %config.brokers,
            topic = %config.topic,
            group = %config.consumer_group,
            "Kafka consumer subscribed"
        );

        Ok(Self { consumer })
    }

    /// Consumes messages until a receive error occurs.
    ///
    /// Each message is logged with its topic, key, value, partition, and
    /// timestamp, then the loop continues. A receive failure terminates the
    /// loop and is returned to the operator.
    ///
    /// # Errors
    ///
    /// Returns the first `KafkaError` encountered while receiving.
    pub async fn run(&self) -> Result<(), KafkaError> {
        loop {
            let message = self.consumer.recv().await?;

            let key = message
                .key()
                .map(|k| String::from_utf8_lossy(k).into_owned())
                .unwrap_or_default();
            let value = message
                .payload()
                .map(|p| String::from_utf8_lossy(p).into_owned())
                .unwrap_or_default();

            tracing::info!(
                topic = %message.topic(),
                key = %key,
                value = %value,
                partition = message.partition(),
                timestamp = ?message.timestamp(),
                "message received"
            );
        }
    }
}
