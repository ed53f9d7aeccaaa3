use crate::application::{
    ApplicationResult,
    error::{ApplicationError, ValidationErrors},
};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Error responses carry either a single message (`{ "error": ... }`) or
/// field-level detail (`{ "errors": { field: [messages] } }`).
#[derive(Debug)]
pub enum HttpError {
    Message { status: StatusCode, message: String },
    Fields { errors: ValidationErrors },
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::Validation(msg) => Self::message(StatusCode::BAD_REQUEST, msg),
            ApplicationError::Invalid(errors) => Self::Fields { errors },
            ApplicationError::ReferentialConflict(msg) => {
                Self::message(StatusCode::BAD_REQUEST, msg)
            }
            ApplicationError::NotFound(msg) => Self::message(StatusCode::NOT_FOUND, msg),
            ApplicationError::Conflict(msg) => Self::message(StatusCode::CONFLICT, msg),
            ApplicationError::Infrastructure(msg) => Self::internal(&msg),
            ApplicationError::Domain(domain_err) => match domain_err {
                DomainError::Validation(msg) => Self::message(StatusCode::BAD_REQUEST, msg),
                DomainError::NotFound(msg) => Self::message(StatusCode::NOT_FOUND, msg),
                DomainError::Conflict(msg) => Self::message(StatusCode::CONFLICT, msg),
                DomainError::ReferenceViolation(msg) => {
                    Self::message(StatusCode::BAD_REQUEST, msg)
                }
                DomainError::Persistence(msg) => Self::internal(&msg),
            },
        }
    }

    fn message(status: StatusCode, message: String) -> Self {
        Self::Message { status, message }
    }

    /// Internal detail is logged, never returned to the caller.
    fn internal(detail: &str) -> Self {
        tracing::error!(error = %detail, "internal error");
        Self::Message {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: "internal server error".into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            Self::Message { status, message } => {
                (status, Json(json!({ "error": message }))).into_response()
            }
            Self::Fields { errors } => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "errors": errors.to_map() })),
            )
                .into_response(),
        }
    }
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
