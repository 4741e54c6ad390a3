//! HTTP DTOs for the todo endpoints.
//!
//! Todos themselves serialize directly as `{id, title, description}`, so
//! only the request bodies and the error shape need dedicated types.

use serde::{Deserialize, Serialize};

/// Body of `POST /todos`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    pub description: String,
}

/// Body of `PUT /todos/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    pub description: String,
}

/// Error body for every failed request: `{"msg": string}`.
///
/// No stack traces or internal identifiers are exposed.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub msg: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
