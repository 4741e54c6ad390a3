//! Event publisher adapters that are transport-independent.

mod in_memory;

pub use in_memory::InMemoryEventPublisher;
