use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::todo::models::CreateTodoCommand;
use crate::domain::todo::models::Todo;
use crate::domain::todo::models::TodoTitle;
use crate::domain::validation::FieldViolation;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_todo(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthenticatedUser>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<ApiSuccess<TodoData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::Validation)?;

    state
        .todo_service
        .create_todo(auth_user.user_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref todo| ApiSuccess::new(StatusCode::CREATED, todo.into()))
}

/// Raw todo creation request body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTodoRequest {
    title: String,
    done: bool,
}

impl CreateTodoRequest {
    fn try_into_command(self) -> Result<CreateTodoCommand, Vec<FieldViolation>> {
        match TodoTitle::new(self.title) {
            Ok(title) => Ok(CreateTodoCommand::new(title, self.done)),
            Err(e) => Err(vec![FieldViolation::new("title", e.to_string())]),
        }
    }
}

/// Wire shape for a todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TodoData {
    pub id: String,
    pub title: String,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Todo> for TodoData {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id.to_string(),
            title: todo.title.as_str().to_string(),
            done: todo.done,
            created_at: todo.created_at,
        }
    }
}
