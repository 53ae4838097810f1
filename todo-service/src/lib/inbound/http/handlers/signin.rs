use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::user::models::Credentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::validation::FieldViolation;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn signin(
    State(state): State<AppState>,
    Json(body): Json<SigninRequest>,
) -> Result<ApiSuccess<SigninResponseData>, ApiError> {
    let credentials = body.try_into_credentials().map_err(ApiError::Validation)?;

    let token = state
        .user_service
        .authenticate(credentials)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(StatusCode::OK, SigninResponseData { token }))
}

/// Raw signin request body.
#[derive(Clone, Deserialize)]
pub struct SigninRequest {
    email: String,
    password: String,
}

impl SigninRequest {
    /// Shape-only validation: a well-formed email and a password of
    /// plausible length. Strength is a registration concern.
    fn try_into_credentials(self) -> Result<Credentials, Vec<FieldViolation>> {
        let mut violations = Vec::new();

        let email = EmailAddress::new(self.email);
        if let Err(e) = &email {
            violations.push(FieldViolation::new("email", e.to_string()));
        }

        if let Err(e) = Credentials::password_shape(&self.password) {
            violations.push(FieldViolation::new("password", e.to_string()));
        }

        match email {
            Ok(email) if violations.is_empty() => Ok(Credentials::new(email, self.password)),
            _ => Err(violations),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigninResponseData {
    pub token: String,
}
