//! Ports - interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between the
//! domain and the outside world. Adapters implement these ports.
//!
//! - `TodoRepository` - persistence contract consumed by the service
//! - `EventPublisher` - notification-emission contract consumed by the service

mod event_publisher;
mod todo_repository;

pub use event_publisher::EventPublisher;
pub use todo_repository::TodoRepository;
