use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    /// No row matched the requested id
    #[error("User not found")]
    NotFound,

    /// Request body failed to decode as JSON
    #[error("{0}")]
    InvalidBody(String),

    /// The store failed or rejected a statement
    #[error("{0}")]
    Database(String),

    /// Startup configuration is unusable
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for RosterError {
    fn from(err: sqlx::Error) -> Self {
        RosterError::Database(err.to_string())
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for RosterError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            RosterError::NotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            RosterError::InvalidBody(msg) => (StatusCode::BAD_REQUEST, msg),
            // Driver error text goes through as-is.
            RosterError::Database(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            RosterError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("configuration error: {}", msg),
            ),
        };
        (status, Json(ErrorResponse { error })).into_response()
    }
}
