use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::fmt;
use thiserror::Error;

use crate::views;

/// Errors surfaced by the item store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No item with the given id exists
    #[error("item {0} not found")]
    NotFound(i64),
    /// Underlying database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Requested record does not exist
    NotFound,
    /// Internal server error
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "Not found"),
            Self::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, "The requested item does not exist"),
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Html(views::error_page(status, message));
        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => Self::NotFound,
            StoreError::Database(e) => Self::Internal(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = AppError::Internal("pool exhausted".to_string());
        assert_eq!(error.to_string(), "Internal error: pool exhausted");
        assert_eq!(AppError::NotFound.to_string(), "Not found");
    }

    #[test]
    fn test_store_error_maps_to_app_error() {
        let error: AppError = StoreError::NotFound(7).into();
        assert!(matches!(error, AppError::NotFound));

        let error: AppError = StoreError::Database(sqlx::Error::PoolClosed).into();
        assert!(matches!(error, AppError::Internal(_)));
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = AppError::NotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_internal_response_hides_detail() {
        let response = AppError::Internal("secret detail".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!body.contains("secret detail"));
    }
}
