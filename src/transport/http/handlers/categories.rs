use crate::domain::model::Category;
use crate::transport::http::types::{error_response, json_422, ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "All categories in creation order", body = ApiResponse)
    )
)]
pub async fn list_categories_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.categories.get_all().await {
        Ok(categories) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!(categories))),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category found", body = ApiResponse),
        (status = 404, description = "Category not found", body = ApiResponse)
    )
)]
pub async fn get_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.categories.get_by_id(id).await {
        Ok(category) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!(category))),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = Category,
    responses(
        (status = 201, description = "Category created with an assigned id", body = ApiResponse),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn create_category_handler(
    State(state): State<AppState>,
    request: Result<Json<Category>, JsonRejection>,
) -> impl IntoResponse {
    let Json(category) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"name\": ..., \"description\": ...}").into_response(),
    };
    match state.categories.create(category).await {
        Ok(created) => (
            StatusCode::CREATED,
            Json(ApiResponse::ok(serde_json::json!(created))),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    request_body = Category,
    responses(
        (status = 200, description = "Category updated, id preserved", body = ApiResponse),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 404, description = "Category not found", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn update_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    request: Result<Json<Category>, JsonRejection>,
) -> impl IntoResponse {
    let Json(category) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"name\": ..., \"description\": ...}").into_response(),
    };
    match state.categories.update(id, category).await {
        Ok(updated) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!(updated))),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = i64, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category deleted", body = ApiResponse),
        (status = 404, description = "Category not found", body = ApiResponse)
    )
)]
pub async fn delete_category_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.categories.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({
                "message": "Category deleted successfully"
            }))),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}
