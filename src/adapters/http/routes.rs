//! Route configuration for the todo endpoints.

use axum::routing::{delete, get, post, put};
use axum::Router;

use super::handlers::{
    create_todo, delete_todo, get_all_todos, get_todo_by_id, update_todo, TodoAppState,
};

/// Creates the todo router with all five endpoints.
///
/// Routes:
/// - `GET /todos` - list all todos
/// - `POST /todos` - create a todo
/// - `GET /todos/:id` - fetch one todo
/// - `PUT /todos/:id` - update a todo
/// - `DELETE /todos/:id` - delete a todo
pub fn todo_router() -> Router<TodoAppState> {
    Router::new()
        .route("/todos", get(get_all_todos))
        .route("/todos", post(create_todo))
        .route("/todos/:id", get(get_todo_by_id))
        .route("/todos/:id", put(update_todo))
        .route("/todos/:id", delete(delete_todo))
}
