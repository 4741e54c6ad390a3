//! Todo repository port.
//!
//! Defines the persistence contract consumed by the service. Any concrete
//! store (relational, in-memory) may implement it.

use async_trait::async_trait;

use crate::domain::{RepositoryError, Todo};

/// Repository port for todo persistence.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Persist a new todo, returning the assigned identifier.
    ///
    /// The `id` field of the input is ignored; the store assigns one.
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure
    async fn create(&self, todo: &Todo) -> Result<i64, RepositoryError>;

    /// Fetch all todos, in unspecified order.
    ///
    /// An empty store yields an empty vec, never an error.
    async fn get_all(&self) -> Result<Vec<Todo>, RepositoryError>;

    /// Fetch a todo by identifier.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the id has no corresponding record
    /// - `Storage` on persistence failure
    async fn get_by_id(&self, id: i64) -> Result<Todo, RepositoryError>;

    /// Overwrite the record referenced by `todo.id`.
    ///
    /// Behavior on a missing id is store-defined; the service does not
    /// pre-check existence before calling.
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure
    async fn update(&self, todo: &Todo) -> Result<(), RepositoryError>;

    /// Remove the record with the given identifier.
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
