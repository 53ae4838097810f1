use async_trait::async_trait;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Todo;
use crate::domain::user::models::UserId;

/// Port for todo operations.
///
/// Every operation is scoped to an owner; there is no way to reach another
/// account's items through this interface.
#[async_trait]
pub trait TodoServicePort: Send + Sync + 'static {
    /// Create a todo item for the given owner.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store operation failed
    async fn create_todo(
        &self,
        owner_id: UserId,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError>;

    /// List the owner's todo items, newest first.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store operation failed
    async fn list_todos(&self, owner_id: UserId) -> Result<Vec<Todo>, TodoError>;
}

/// Persistence port for todo items.
#[async_trait]
pub trait TodoRepository: Send + Sync + 'static {
    /// Persist a new todo item.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store operation failed
    async fn insert(&self, todo: Todo) -> Result<Todo, TodoError>;

    /// Fetch all items belonging to one owner, newest first.
    ///
    /// # Errors
    /// * `StoreUnavailable` - Store operation failed
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Todo>, TodoError>;
}
