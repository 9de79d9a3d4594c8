//! Error types for the Cache Demo server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Durable store failure
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid database path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Cache server failure
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Invalid cache URL: {0}")]
    InvalidUrl(String),
}

/// Failure of an item operation, surfaced as a 5xx
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Storage(e) => error!("Storage failure: {}", e),
            AppError::Cache(e) => error!("Cache failure: {}", e),
        }
        let body = Json(json!({ "detail": "Internal Server Error" }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// One offending location in a rejected request
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Malformed request body or path parameter, surfaced as a 422
#[derive(Error, Debug)]
#[error("Validation error: {}", summarize(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.msg.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        Self {
            errors: vec![FieldError {
                loc: loc.iter().map(|s| s.to_string()).collect(),
                msg: msg.into(),
                kind: kind.to_string(),
            }],
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "detail": self.errors }));
        (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_hides_detail() {
        let err = AppError::from(CacheError::InvalidUrl("empty".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_error_status_and_message() {
        let err = ValidationError::new(&["path", "item_id"], "not an integer", "int_parsing");
        assert_eq!(err.to_string(), "Validation error: not an integer");
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
