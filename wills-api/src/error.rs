use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use wills_catalog::CatalogError;
use wills_core::repository::StoreError;
use wills_order::OrderError;

#[derive(Debug)]
pub enum ApiError {
    InvalidArgument(String),
    NotFound(String),
    ServiceUnavailable(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::InvalidArgument(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!("Store unavailable: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database not configured".to_string(),
                )
            }
            ApiError::Internal(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let message = err.to_string();
        match err {
            CatalogError::InvalidId => ApiError::InvalidArgument(message),
            CatalogError::NotFound => ApiError::NotFound(message),
            CatalogError::Store(StoreError::Closed) => ApiError::ServiceUnavailable(message),
            other => ApiError::Internal(other.into()),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::InvalidId | OrderError::Validation(_) => {
                ApiError::InvalidArgument(message)
            }
            OrderError::PlanNotFound | OrderError::NotFound => ApiError::NotFound(message),
            OrderError::Store(StoreError::Closed) => ApiError::ServiceUnavailable(message),
            other => ApiError::Internal(other.into()),
        }
    }
}
