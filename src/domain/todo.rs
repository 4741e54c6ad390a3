//! The Todo entity.
//!
//! A todo is never observable with a title or description outside the
//! [1, 255] character bounds; construction fails instead.

use serde::{Deserialize, Serialize};

use super::errors::TodoError;

/// Minimum accepted length for title and description, in characters.
const MIN_FIELD_LEN: usize = 1;
/// Maximum accepted length for title and description, in characters.
const MAX_FIELD_LEN: usize = 255;

/// The managed resource: an identifier plus a title and description.
///
/// The identifier is assigned by the persistence layer on creation and is
/// zero before the todo has been stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Store-assigned identifier; zero before creation.
    pub id: i64,
    /// Title, 1 to 255 characters.
    pub title: String,
    /// Description, 1 to 255 characters.
    pub description: String,
}

impl Todo {
    /// Construct a todo from raw input, enforcing the field constraints.
    ///
    /// Inputs are used verbatim: no trimming, no case folding. The returned
    /// todo has `id == 0` until the persistence layer assigns one.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Validation`] when either field's character
    /// length falls outside [1, 255].
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Result<Self, TodoError> {
        let title = title.into();
        let description = description.into();

        if !field_len_ok(&title) {
            return Err(TodoError::Validation(
                "title should have length between 1 and 255 chars".to_string(),
            ));
        }

        if !field_len_ok(&description) {
            return Err(TodoError::Validation(
                "description should have length between 1 and 255 chars".to_string(),
            ));
        }

        Ok(Self {
            id: 0,
            title,
            description,
        })
    }
}

fn field_len_ok(value: &str) -> bool {
    let len = value.chars().count();
    (MIN_FIELD_LEN..=MAX_FIELD_LEN).contains(&len)
}
