use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::todo::ports::TodoServicePort;
use crate::domain::user::models::UserId;

/// Todo orchestrator.
///
/// Thin on purpose: stamps identity and creation time onto new items and
/// keeps every repository call scoped to the owner it was made for.
pub struct TodoService<R>
where
    R: TodoRepository,
{
    repository: Arc<R>,
}

impl<R> TodoService<R>
where
    R: TodoRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> TodoServicePort for TodoService<R>
where
    R: TodoRepository,
{
    async fn create_todo(
        &self,
        owner_id: UserId,
        command: CreateTodoCommand,
    ) -> Result<Todo, TodoError> {
        let todo = Todo {
            id: TodoId::new(),
            owner_id,
            title: command.title,
            done: command.done,
            created_at: Utc::now(),
        };

        self.repository.insert(todo).await
    }

    async fn list_todos(&self, owner_id: UserId) -> Result<Vec<Todo>, TodoError> {
        self.repository.list_by_owner(&owner_id).await
    }
}
