//! Kafka adapters (rdkafka, works against any Kafka-compatible broker).

mod consumer;
mod publisher;

pub use consumer::TodoEventConsumer;
pub use publisher::KafkaEventPublisher;
