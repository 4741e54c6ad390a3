//! HTTP adapter - axum handlers, DTOs, and routes for the todo API.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateTodoRequest, ErrorResponse, UpdateTodoRequest};
pub use handlers::{ApiError, TodoAppState};
pub use routes::todo_router;
