/// Server error types
use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Creation failed: {0}")]
    Creation(String),

    #[error("Invalid user ID")]
    InvalidId,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ServerError {
    /// Machine readable code placed in the `error` field of the body
    pub fn code(&self) -> &'static str {
        match self {
            ServerError::Validation(_) => "validation_error",
            ServerError::Creation(_) => "creation_error",
            ServerError::InvalidId => "invalid_id",
            ServerError::NotFound(_) => "user_not_found",
            ServerError::Config(_) => "internal_error",
        }
    }
}

impl From<RosterError> for ServerError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::Validation(e) => ServerError::Validation(e.to_string()),
            RosterError::DuplicateEmail(_) | RosterError::DuplicateUsername(_) => {
                ServerError::Creation(err.to_string())
            }
            RosterError::UserNotFound(_) => ServerError::NotFound(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("Rejected path: {}", rejection.body_text());
        ServerError::InvalidId
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let code = self.code();
        let (status, message) = match self {
            ServerError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Creation(msg) => (StatusCode::CONFLICT, msg),
            ServerError::InvalidId => (StatusCode::BAD_REQUEST, "Invalid user ID".to_string()),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": code,
            "message": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_core::ValidationError;

    #[test]
    fn test_roster_errors_map_to_codes() {
        let cases = [
            (
                RosterError::from(ValidationError::new(
                    "email",
                    "must be a valid email address",
                )),
                "validation_error",
            ),
            (
                RosterError::DuplicateEmail("a@b.com".to_string()),
                "creation_error",
            ),
            (
                RosterError::DuplicateUsername("alice".to_string()),
                "creation_error",
            ),
            (RosterError::UserNotFound(3), "user_not_found"),
        ];

        for (err, code) in cases {
            assert_eq!(ServerError::from(err).code(), code);
        }
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (ServerError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ServerError::Creation("x".into()), StatusCode::CONFLICT),
            (ServerError::InvalidId, StatusCode::BAD_REQUEST),
            (ServerError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                ServerError::Config("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_conflict_message_is_store_message() {
        let err = ServerError::from(RosterError::DuplicateEmail("a@b.com".to_string()));
        match err {
            ServerError::Creation(msg) => assert_eq!(msg, "email already exists"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
