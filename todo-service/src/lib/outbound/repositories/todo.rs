use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::todo::errors::TodoError;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoId;
use crate::domain::todo::models::TodoTitle;
use crate::domain::todo::ports::TodoRepository;
use crate::domain::user::models::UserId;

/// PostgreSQL implementation of the todo store.
pub struct PostgresTodoRepository {
    pool: PgPool,
}

impl PostgresTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Raw row shape for the todos table.
#[derive(sqlx::FromRow)]
struct TodoRow {
    id: Uuid,
    user_id: Uuid,
    title: String,
    done: bool,
    created_at: DateTime<Utc>,
}

impl TryFrom<TodoRow> for Todo {
    type Error = TodoError;

    fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
        Ok(Todo {
            id: TodoId(row.id),
            owner_id: UserId(row.user_id),
            title: TodoTitle::new(row.title)?,
            done: row.done,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl TodoRepository for PostgresTodoRepository {
    async fn insert(&self, todo: Todo) -> Result<Todo, TodoError> {
        sqlx::query(
            r#"
            INSERT INTO todos (id, user_id, title, done, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(todo.id.0)
        .bind(todo.owner_id.0)
        .bind(todo.title.as_str())
        .bind(todo.done)
        .bind(todo.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| TodoError::StoreUnavailable(e.to_string()))?;

        Ok(todo)
    }

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Todo>, TodoError> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT id, user_id, title, done, created_at
            FROM todos
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TodoError::StoreUnavailable(e.to_string()))?;

        rows.into_iter().map(Todo::try_from).collect()
    }
}
