//! Application layer - use-case orchestration over the ports.

mod todo_service;

pub use todo_service::TodoService;
