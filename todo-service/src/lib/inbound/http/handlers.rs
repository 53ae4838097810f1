use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::todo::errors::TodoError;
use crate::domain::validation::FieldViolation;
use crate::user::errors::UserError;

pub mod create_todo;
pub mod list_todos;
pub mod signin;
pub mod signup;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Input broke validation rules; carries every collected violation
    Validation(Vec<FieldViolation>),
    Conflict(String),
    Forbidden(String),
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(violations) => {
                let status = StatusCode::BAD_REQUEST;
                let errors = violations.iter().map(FieldViolationData::from).collect();
                let body = ApiResponseBody::new_field_errors(
                    status,
                    "Incorrect format".to_string(),
                    errors,
                );
                (status, Json(body)).into_response()
            }
            ApiError::Conflict(message) => {
                let status = StatusCode::CONFLICT;
                (status, Json(ApiResponseBody::new_error(status, message))).into_response()
            }
            ApiError::Forbidden(message) => {
                let status = StatusCode::FORBIDDEN;
                (status, Json(ApiResponseBody::new_error(status, message))).into_response()
            }
            ApiError::InternalServerError(detail) => {
                // The detail stays in the log; the caller gets an opaque body
                tracing::error!(error = %detail, "Request failed with internal error");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = ApiResponseBody::new_error(status, "Internal server error".to_string());
                (status, Json(body)).into_response()
            }
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidCredentials => ApiError::Forbidden(err.to_string()),
            UserError::InvalidEmail(_)
            | UserError::InvalidName(_)
            | UserError::Password(_)
            | UserError::StoreUnavailable(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<TodoError> for ApiError {
    fn from(err: TodoError) -> Self {
        // Both variants mean the store or its contents failed us
        ApiError::InternalServerError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                message,
                errors: None,
            },
        }
    }

    pub fn new_field_errors(
        status_code: StatusCode,
        message: String,
        errors: Vec<FieldViolationData>,
    ) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData {
                message,
                errors: Some(errors),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldViolationData>>,
}

/// Wire shape for a single field-level violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolationData {
    pub field: String,
    pub message: String,
}

impl From<&FieldViolation> for FieldViolationData {
    fn from(violation: &FieldViolation) -> Self {
        Self {
            field: violation.field.to_string(),
            message: violation.message.clone(),
        }
    }
}
