use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::models::ProductId;

// ── Domain errors ─────────────────────────────────────────────────────────────

/// Raw request input that cannot be turned into a query.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid id")]
    InvalidId,
}

/// Failure of the backing store while answering a search.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("product store unavailable: {0}")]
    Unavailable(String),
    #[error("{0}")]
    Other(String),
}

/// Seed data that would violate the product table invariants.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("product id must be positive, got {0}")]
    InvalidId(ProductId),
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
    #[error("product {id} has invalid price {price}")]
    InvalidPrice { id: ProductId, price: f64 },
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),
}

// ── HTTP boundary ─────────────────────────────────────────────────────────────

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    /// The payload is the cause; it goes to the log, never to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<QueryError> for AppError {
    fn from(err: QueryError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error envelope: `{"status": <reason phrase>, "message": <text>}`.
pub fn error_body(status: StatusCode, message: &str) -> Json<serde_json::Value> {
    Json(json!({
        "status": status.canonical_reason().unwrap_or("Unknown"),
        "message": message,
    }))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::BadRequest(msg) => msg.as_str(),
            AppError::Internal(cause) => {
                error!(cause = %cause, "Request failed with internal error");
                "internal error"
            }
        };
        (status, error_body(status, message)).into_response()
    }
}
