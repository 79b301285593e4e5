use crate::app::{CategoryService, ProductService};
use crate::domain::error::ApiError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use serde_json::Value as JsonValue;
use sqlx::PgPool;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService>,
    pub categories: Arc<CategoryService>,
    /// Present only for the postgres backend; the health check pings it.
    pub pool: Option<PgPool>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok(data: JsonValue) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Maps an error kind to its protocol status. This is the only place a
/// status code is chosen from an [`ApiError`].
pub fn error_response(err: ApiError) -> (StatusCode, Json<ApiResponse>) {
    let status = match &err {
        ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
        ApiError::Storage { .. } => {
            tracing::error!(error = %err, "storage failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse::error(format!(
            "Invalid JSON body: {} (expected: {})",
            err, expected
        ))),
    )
}
