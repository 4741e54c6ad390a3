//! PostgreSQL implementation of TodoRepository.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::{RepositoryError, Todo};
use crate::ports::TodoRepository;

/// PostgreSQL implementation of TodoRepository.
#[derive(Clone)]
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    /// Creates a new PostgresTodoRepository over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn create(&self, todo: &Todo) -> Result<i64, RepositoryError> {
        let row = sqlx::query("INSERT INTO todos (title, description) VALUES ($1, $2) RETURNING id")
            .bind(&todo.title)
            .bind(&todo.description)
            .fetch_one(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        row.try_get("id").map_err(RepositoryError::storage)
    }

    async fn get_all(&self) -> Result<Vec<Todo>, RepositoryError> {
        let rows = sqlx::query("SELECT id, title, description FROM todos")
            .fetch_all(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        rows.into_iter().map(row_to_todo).collect()
    }

    async fn get_by_id(&self, id: i64) -> Result<Todo, RepositoryError> {
        let row = sqlx::query("SELECT id, title, description FROM todos WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        match row {
            Some(row) => row_to_todo(row),
            None => Err(RepositoryError::NotFound(id)),
        }
    }

    async fn update(&self, todo: &Todo) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE todos SET title = $2, description = $3 WHERE id = $1")
            .bind(todo.id)
            .bind(&todo.title)
            .bind(&todo.description)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(RepositoryError::storage)?;

        Ok(())
    }
}

fn row_to_todo(row: sqlx::postgres::PgRow) -> Result<Todo, RepositoryError> {
    Ok(Todo {
        id: row.try_get("id").map_err(RepositoryError::storage)?,
        title: row.try_get("title").map_err(RepositoryError::storage)?,
        description: row
            .try_get("description")
            .map_err(RepositoryError::storage)?,
    })
}
