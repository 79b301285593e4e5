use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (DB reachable when configured)", body = ApiResponse),
        (status = 503, description = "Service is unhealthy (DB unreachable)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    // Memory backend has nothing to probe; postgres gets a ping.
    let Some(pool) = state.pool else {
        return (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({
                "status": "OK",
                "message": "API is Running"
            }))),
        )
            .into_response();
    };

    match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({
                "status": "OK",
                "message": "API is Running"
            }))),
        )
            .into_response(),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::error(format!("DB ping failed: {}", e))),
        )
            .into_response(),
    }
}
