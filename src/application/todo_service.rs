//! TodoService - orchestrates validation, persistence, and event publication.
//!
//! Every mutating use case performs persistence strictly before publication:
//! the event is a notification of a fact already committed, never a promise
//! of one. A failed publish is reported but does not roll back the write.

use std::sync::Arc;

use crate::domain::{RepositoryError, Todo, TodoError, TodoEvent};
use crate::ports::{EventPublisher, TodoRepository};

/// Stateless orchestrator for the five todo use cases.
///
/// Holds no state across calls; safe to share across concurrent requests.
pub struct TodoService {
    repository: Arc<dyn TodoRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl TodoService {
    pub fn new(repository: Arc<dyn TodoRepository>, publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    /// Validate, persist, and announce a new todo.
    ///
    /// # Errors
    ///
    /// - `Validation` when either field violates the length bounds; nothing
    ///   is persisted and no event is published
    /// - `Internal` when persistence fails; no event is published
    /// - `EventPublish` when the write committed but the event could not be
    ///   sent; the error carries the created todo
    pub async fn create(&self, title: &str, description: &str) -> Result<Todo, TodoError> {
        let mut todo = Todo::new(title, description)?;

        let id = self
            .repository
            .create(&todo)
            .await
            .map_err(|e| TodoError::internal("failed to create todo", e))?;
        todo.id = id;

        if let Err(e) = self.publisher.publish(&TodoEvent::created(todo.clone())).await {
            return Err(TodoError::event_publish(todo, e));
        }

        Ok(todo)
    }

    /// Fetch all todos. An empty store yields an empty vec.
    ///
    /// # Errors
    ///
    /// - `Internal` on any persistence failure
    pub async fn get_all(&self) -> Result<Vec<Todo>, TodoError> {
        self.repository
            .get_all()
            .await
            .map_err(|e| TodoError::internal("failed to get all todos", e))
    }

    /// Fetch a single todo by identifier.
    ///
    /// # Errors
    ///
    /// - `NotFound` when the id has no corresponding record
    /// - `Internal` on any other persistence failure
    pub async fn get_by_id(&self, id: i64) -> Result<Todo, TodoError> {
        match self.repository.get_by_id(id).await {
            Ok(todo) => Ok(todo),
            Err(RepositoryError::NotFound(id)) => Err(TodoError::NotFound(format!(
                "todo with id {id} is not found"
            ))),
            Err(e) => Err(TodoError::internal("failed to get todo by id", e)),
        }
    }

    /// Persist an update, then announce it.
    ///
    /// Existence of `todo.id` is not pre-checked here; the HTTP adapter
    /// re-fetches before calling so a missing id surfaces as not-found at
    /// the boundary.
    ///
    /// # Errors
    ///
    /// Same two-phase split as [`TodoService::create`].
    pub async fn update(&self, todo: Todo) -> Result<(), TodoError> {
        self.repository
            .update(&todo)
            .await
            .map_err(|e| TodoError::internal("failed to update todo", e))?;

        if let Err(e) = self.publisher.publish(&TodoEvent::updated(todo.clone())).await {
            return Err(TodoError::event_publish(todo, e));
        }

        Ok(())
    }

    /// Remove a todo, then announce the deletion.
    ///
    /// The event carries the pre-deletion snapshot passed in by the caller.
    ///
    /// # Errors
    ///
    /// Same two-phase split as [`TodoService::create`].
    pub async fn delete(&self, todo: Todo) -> Result<(), TodoError> {
        self.repository
            .delete(todo.id)
            .await
            .map_err(|e| TodoError::internal("failed to delete todo", e))?;

        if let Err(e) = self.publisher.publish(&TodoEvent::deleted(todo.clone())).await {
            return Err(TodoError::event_publish(todo, e));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::events::InMemoryEventPublisher;
    use crate::domain::EventKind;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ───────────────────────────────────────────────────────────────
    // Mock repository
    // ───────────────────────────────────────────────────────────────

    #[derive(Default)]
    struct MockTodoRepository {
        todos: Mutex<Vec<Todo>>,
        next_id: Mutex<i64>,
        fail_storage: bool,
    }

    impl MockTodoRepository {
        fn new() -> Self {
            Self {
                next_id: Mutex::new(1),
                ..Default::default()
            }
        }

        fn failing() -> Self {
            Self {
                fail_storage: true,
                ..Self::new()
            }
        }

        fn with_todo(todo: Todo) -> Self {
            let repo = Self::new();
            repo.todos.lock().unwrap().push(todo);
            repo
        }

        fn stored(&self) -> Vec<Todo> {
            self.todos.lock().unwrap().clone()
        }

        fn storage_error() -> RepositoryError {
            RepositoryError::storage(std::io::Error::new(
                std::io::ErrorKind::Other,
                "connection reset",
            ))
        }
    }

    #[async_trait]
    impl TodoRepository for MockTodoRepository {
        async fn create(&self, todo: &Todo) -> Result<i64, RepositoryError> {
            if self.fail_storage {
                return Err(Self::storage_error());
            }
            let mut next_id = self.next_id.lock().unwrap();
            let id = *next_id;
            *next_id += 1;
            self.todos.lock().unwrap().push(Todo { id, ..todo.clone() });
            Ok(id)
        }

        async fn get_all(&self) -> Result<Vec<Todo>, RepositoryError> {
            if self.fail_storage {
                return Err(Self::storage_error());
            }
            Ok(self.stored())
        }

        async fn get_by_id(&self, id: i64) -> Result<Todo, RepositoryError> {
            if self.fail_storage {
                return Err(Self::storage_error());
            }
            self.stored()
                .into_iter()
                .find(|t| t.id == id)
                .ok_or(RepositoryError::NotFound(id))
        }

        async fn update(&self, todo: &Todo) -> Result<(), RepositoryError> {
            if self.fail_storage {
                return Err(Self::storage_error());
            }
            let mut todos = self.todos.lock().unwrap();
            if let Some(pos) = todos.iter().position(|t| t.id == todo.id) {
                todos[pos] = todo.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
            if self.fail_storage {
                return Err(Self::storage_error());
            }
            self.todos.lock().unwrap().retain(|t| t.id != id);
            Ok(())
        }
    }

    fn service(
        repository: Arc<MockTodoRepository>,
        publisher: Arc<InMemoryEventPublisher>,
    ) -> TodoService {
        TodoService::new(repository, publisher)
    }

    // ───────────────────────────────────────────────────────────────
    // Create
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn create_persists_then_publishes() {
        let repository = Arc::new(MockTodoRepository::new());
        let publisher = Arc::new(InMemoryEventPublisher::new());
        let service = service(repository.clone(), publisher.clone());

        let todo = service.create("Buy milk", "2 liters").await.unwrap();

        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "Buy milk");
        assert_eq!(repository.stored().len(), 1);

        let events = publisher.published_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Create);
        assert_eq!(events[0].todo, todo);
        assert_eq!(events[0].key(), "1");
    }

    #[tokio::test]
    async fn create_with_invalid_title_touches_nothing() {
        let repository = Arc::new(MockTodoRepository::new());
        let publisher = Arc::new(InMemoryEventPublisher::new());
        let service = service(repository.clone(), publisher.clone());

        let err = service.create("", "x").await.unwrap_err();

        assert!(matches!(err, TodoError::Validation(_)));
        assert!(repository.stored().is_empty());
        assert_eq!(publisher.event_count(), 0);
    }

    #[tokio::test]
    async fn create_storage_failure_is_internal_and_publishes_nothing() {
        let repository = Arc::new(MockTodoRepository::failing());
        let publisher = Arc::new(InMemoryEventPublisher::new());
        let service = service(repository, publisher.clone());

        let err = service.create("Buy milk", "2 liters").await.unwrap_err();

        assert!(matches!(err, TodoError::Internal { .. }));
        assert_eq!(err.to_string(), "failed to create todo");
        assert_eq!(publisher.event_count(), 0);
    }

    #[tokio::test]
    async fn create_publish_failure_still_commits_the_record() {
        let repository = Arc::new(MockTodoRepository::new());
        let publisher = Arc::new(InMemoryEventPublisher::failing());
        let service = service(repository.clone(), publisher);

        let err = service.create("Buy milk", "2 liters").await.unwrap_err();

        match err {
            TodoError::EventPublish { todo, .. } => assert_eq!(todo.id, 1),
            other => panic!("unexpected variant: {other:?}"),
        }
        // Record is durably created even though the event failed.
        assert_eq!(repository.stored().len(), 1);
    }

    // ───────────────────────────────────────────────────────────────
    // Queries
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn get_all_on_empty_store_is_empty_vec() {
        let service = service(
            Arc::new(MockTodoRepository::new()),
            Arc::new(InMemoryEventPublisher::new()),
        );

        let todos = service.get_all().await.unwrap();
        assert!(todos.is_empty());
    }

    #[tokio::test]
    async fn get_by_id_missing_is_not_found_with_id_in_message() {
        let service = service(
            Arc::new(MockTodoRepository::new()),
            Arc::new(InMemoryEventPublisher::new()),
        );

        let err = service.get_by_id(999).await.unwrap_err();

        match err {
            TodoError::NotFound(msg) => assert!(msg.contains("999")),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_by_id_storage_failure_is_internal_not_not_found() {
        let service = service(
            Arc::new(MockTodoRepository::failing()),
            Arc::new(InMemoryEventPublisher::new()),
        );

        let err = service.get_by_id(1).await.unwrap_err();
        assert!(matches!(err, TodoError::Internal { .. }));
    }

    #[tokio::test]
    async fn create_then_fetch_round_trips() {
        let service = service(
            Arc::new(MockTodoRepository::new()),
            Arc::new(InMemoryEventPublisher::new()),
        );

        let created = service.create("Buy milk", "2 liters").await.unwrap();
        let fetched = service.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched.title, created.title);
        assert_eq!(fetched.description, created.description);
    }

    // ───────────────────────────────────────────────────────────────
    // Update
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn update_persists_through_the_repository_then_publishes() {
        let existing = Todo {
            id: 1,
            title: "old".to_string(),
            description: "old".to_string(),
        };
        let repository = Arc::new(MockTodoRepository::with_todo(existing));
        let publisher = Arc::new(InMemoryEventPublisher::new());
        let service = service(repository.clone(), publisher.clone());

        let updated = Todo {
            id: 1,
            title: "new".to_string(),
            description: "new".to_string(),
        };
        service.update(updated.clone()).await.unwrap();

        assert_eq!(repository.stored(), vec![updated.clone()]);

        let events = publisher.published_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Update);
        assert_eq!(events[0].todo, updated);
    }

    #[tokio::test]
    async fn update_publish_failure_keeps_the_write() {
        let existing = Todo {
            id: 1,
            title: "old".to_string(),
            description: "old".to_string(),
        };
        let repository = Arc::new(MockTodoRepository::with_todo(existing));
        let publisher = Arc::new(InMemoryEventPublisher::failing());
        let service = service(repository.clone(), publisher);

        let updated = Todo {
            id: 1,
            title: "new".to_string(),
            description: "new".to_string(),
        };
        let err = service.update(updated.clone()).await.unwrap_err();

        assert!(matches!(err, TodoError::EventPublish { .. }));
        assert_eq!(repository.stored(), vec![updated]);
    }

    // ───────────────────────────────────────────────────────────────
    // Delete
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn delete_removes_then_publishes_pre_deletion_snapshot() {
        let existing = Todo {
            id: 1,
            title: "Buy milk".to_string(),
            description: "2 liters".to_string(),
        };
        let repository = Arc::new(MockTodoRepository::with_todo(existing.clone()));
        let publisher = Arc::new(InMemoryEventPublisher::new());
        let service = service(repository.clone(), publisher.clone());

        service.delete(existing.clone()).await.unwrap();

        assert!(repository.stored().is_empty());

        let events = publisher.published_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::Delete);
        assert_eq!(events[0].todo, existing);
    }

    #[tokio::test]
    async fn delete_then_fetch_is_not_found() {
        let existing = Todo {
            id: 1,
            title: "Buy milk".to_string(),
            description: "2 liters".to_string(),
        };
        let repository = Arc::new(MockTodoRepository::with_todo(existing.clone()));
        let publisher = Arc::new(InMemoryEventPublisher::new());
        let service = service(repository, publisher);

        service.delete(existing).await.unwrap();

        let err = service.get_by_id(1).await.unwrap_err();
        assert!(matches!(err, TodoError::NotFound(_)));
    }
}
