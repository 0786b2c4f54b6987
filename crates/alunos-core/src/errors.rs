//! Application error type.
//!
//! Every failure a handler can produce is an [`AppError`]: an HTTP status plus
//! an [`anyhow::Error`] describing what went wrong. Converting it into a
//! response yields a JSON body of the form `{"error": "<message>"}`.

use anyhow::{Error, anyhow};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new(status: StatusCode, err: impl Into<Error>) -> Self {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// Internal error built from a plain message, used for signing failures.
    pub fn internal_error(message: String) -> Self {
        Self::internal(anyhow!(message))
    }

    pub fn not_found(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request(err: impl Into<Error>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn unauthorized(message: String) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, anyhow!(message))
    }

    /// Store failure, reported as 500.
    pub fn database(err: impl Into<Error>) -> Self {
        Self::internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
        }

        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
