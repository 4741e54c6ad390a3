//! Change events emitted after successful mutations.
//!
//! An event is a one-shot value object: created synchronously inside the
//! service immediately after a successful persistence operation, handed to
//! the publisher, and never stored by the core.

use serde::{Deserialize, Serialize};

use super::todo::Todo;

/// The kind of mutation an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Create,
    Update,
    Delete,
}

/// Immutable record of a todo state change.
///
/// Wire shape: `{"event": "create"|"update"|"delete", "todo": {...}}`.
/// The `todo` field carries the full snapshot at the time of the event:
/// post-mutation state for create/update, the pre-deletion snapshot for
/// delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoEvent {
    #[serde(rename = "event")]
    pub kind: EventKind,
    pub todo: Todo,
}

impl TodoEvent {
    pub fn created(todo: Todo) -> Self {
        Self {
            kind: EventKind::Create,
            todo,
        }
    }

    pub fn updated(todo: Todo) -> Self {
        Self {
            kind: EventKind::Update,
            todo,
        }
    }

    pub fn deleted(todo: Todo) -> Self {
        Self {
            kind: EventKind::Delete,
            todo,
        }
    }

    /// Publish key: the todo id as a decimal string.
    ///
    /// Key-partitioned transports thereby preserve per-todo ordering.
    pub fn key(&self) -> String {
        self.todo.id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_todo() -> Todo {
        Todo {
            id: 1,
            title: "Buy milk".to_string(),
            description: "2 liters".to_string(),
        }
    }

    #[test]
    fn create_event_serializes_to_wire_shape() {
        let event = TodoEvent::created(sample_todo());
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "event": "create",
                "todo": {"id": 1, "title": "Buy milk", "description": "2 liters"}
            })
        );
    }

    #[test]
    fn kind_tags_match_operation_names() {
        assert_eq!(
            serde_json::to_value(EventKind::Create).unwrap(),
            serde_json::json!("create")
        );
        assert_eq!(
            serde_json::to_value(EventKind::Update).unwrap(),
            serde_json::json!("update")
        );
        assert_eq!(
            serde_json::to_value(EventKind::Delete).unwrap(),
            serde_json::json!("delete")
        );
    }

    #[test]
    fn key_is_decimal_id() {
        assert_eq!(TodoEvent::deleted(sample_todo()).key(), "1");
    }
}
