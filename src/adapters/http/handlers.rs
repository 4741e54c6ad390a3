//! HTTP handlers for the todo endpoints.
//!
//! Each handler parses transport-level input, invokes the matching service
//! method, and renders either the resulting todo(s) or the classified error.
//! A malformed path id is rejected as a bad request before reaching the
//! service.

use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::TodoService;
use crate::domain::{Todo, TodoError};
use crate::ports::{EventPublisher, TodoRepository};

use super::dto::{CreateTodoRequest, ErrorResponse, UpdateTodoRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing the injected ports.
#[derive(Clone)]
pub struct TodoAppState {
    pub repository: Arc<dyn TodoRepository>,
    pub publisher: Arc<dyn EventPublisher>,
}

impl TodoAppState {
    pub fn new(repository: Arc<dyn TodoRepository>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    pub fn service(&self) -> TodoService {
        TodoService::new(self.repository.clone(), self.publisher.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /todos - list all todos.
pub async fn get_all_todos(
    State(state): State<TodoAppState>,
) -> Result<impl IntoResponse, ApiError> {
    let todos = state.service().get_all().await?;
    Ok((StatusCode::OK, Json(todos)))
}

/// POST /todos - create a todo.
pub async fn create_todo(
    State(state): State<TodoAppState>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let todo = state
        .service()
        .create(&request.title, &request.description)
        .await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos/:id - fetch one todo.
pub async fn get_todo_by_id(
    State(state): State<TodoAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let todo = state.service().get_by_id(id).await?;
    Ok((StatusCode::OK, Json(todo)))
}

/// PUT /todos/:id - replace a todo's title and description.
///
/// Re-fetches the existing record first, so an unknown id surfaces as
/// not-found before any write is attempted, then re-validates and
/// reconstructs the todo preserving the original identifier.
pub async fn update_todo(
    State(state): State<TodoAppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let service = state.service();

    let existing = service.get_by_id(id).await?;

    let mut updated = Todo::new(request.title, request.description)?;
    updated.id = existing.id;

    service.update(updated.clone()).await?;

    Ok((StatusCode::OK, Json(updated)))
}

/// DELETE /todos/:id - delete a todo.
///
/// Fetches the record first so the delete event carries the pre-deletion
/// snapshot.
pub async fn delete_todo(
    State(state): State<TodoAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let service = state.service();

    let todo = service.get_by_id(id).await?;
    service.delete(todo).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid todo id: {raw}")))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts service errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Internal(String),
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        match err {
            TodoError::Validation(msg) => ApiError::BadRequest(msg),
            TodoError::NotFound(msg) => ApiError::NotFound(msg),
            TodoError::EventPublish { message, .. } => ApiError::Internal(message),
            TodoError::Internal { message, .. } => ApiError::Internal(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, msg) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(ErrorResponse::new(msg))).into_response()
    }
}
