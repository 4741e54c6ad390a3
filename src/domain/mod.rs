//! Domain layer - the todo entity, change events, and the error taxonomy.
//!
//! Everything here is free of infrastructure concerns. Adapters translate
//! to and from these types at the edges.

mod errors;
mod event;
mod todo;

pub use errors::{PublishError, RepositoryError, TodoError};
pub use event::{EventKind, TodoEvent};
pub use todo::Todo;
