use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::todo::errors::TodoTitleError;
use crate::domain::user::models::UserId;

/// Unique identifier for a todo item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TodoId(pub Uuid);

impl TodoId {
    /// Generate a new random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A todo item owned by exactly one account.
#[derive(Debug, Clone)]
pub struct Todo {
    pub id: TodoId,
    pub owner_id: UserId,
    pub title: TodoTitle,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

/// Todo title value object, 1 to 100 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    const MAX_LENGTH: usize = 100;

    /// Validate a raw title.
    ///
    /// # Errors
    /// * `Empty` - Title has no characters
    /// * `TooLong` - More than 100 characters
    pub fn new(title: String) -> Result<Self, TodoTitleError> {
        let length = title.chars().count();

        if length == 0 {
            Err(TodoTitleError::Empty)
        } else if length > Self::MAX_LENGTH {
            Err(TodoTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            })
        } else {
            Ok(Self(title))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TodoTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a todo item.
///
/// The owner is not part of the command; it always comes from the verified
/// request identity, never from the request body.
#[derive(Debug)]
pub struct CreateTodoCommand {
    pub title: TodoTitle,
    pub done: bool,
}

impl CreateTodoCommand {
    pub fn new(title: TodoTitle, done: bool) -> Self {
        Self { title, done }
    }
}
