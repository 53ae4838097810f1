use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::DisplayName;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::validation::FieldViolation;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::Validation)?;

    state
        .user_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// Raw signup request body.
#[derive(Clone, Deserialize)]
pub struct SignupRequest {
    email: String,
    name: String,
    password: String,
}

impl SignupRequest {
    /// Validate every field, collecting all violations instead of stopping
    /// at the first one.
    fn try_into_command(self) -> Result<RegisterUserCommand, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let email = EmailAddress::new(self.email);
        if let Err(e) = &email {
            violations.push(FieldViolation::new("email", e.to_string()));
        }

        let name = DisplayName::new(self.name);
        if let Err(e) = &name {
            violations.push(FieldViolation::new("name", e.to_string()));
        }

        let password = Password::new(self.password);
        if let Err(errors) = &password {
            for e in errors {
                violations.push(FieldViolation::new("password", e.to_string()));
            }
        }

        match (email, name, password) {
            (Ok(email), Ok(name), Ok(password)) => {
                Ok(RegisterUserCommand::new(email, name, password))
            }
            _ => Err(violations),
        }
    }
}

/// Public view of a freshly created account. The password hash never leaves
/// the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupResponseData {
    pub id: String,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for SignupResponseData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.as_str().to_string(),
            name: user.name.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}
