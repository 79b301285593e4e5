use crate::domain::model::Product;
use crate::transport::http::types::{error_response, json_422, ApiResponse, AppState};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products in creation order", body = ApiResponse)
    )
)]
pub async fn list_products_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.products.get_all().await {
        Ok(products) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!(products))),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product found", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.products.get_by_id(id).await {
        Ok(product) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!(product))),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/products",
    request_body = Product,
    responses(
        (status = 201, description = "Product created with an assigned id", body = ApiResponse),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    request: Result<Json<Product>, JsonRejection>,
) -> impl IntoResponse {
    let Json(product) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"name\": ..., \"price\": ..., \"stock\": ...}").into_response(),
    };
    match state.products.create(product).await {
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
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    request_body = Product,
    responses(
        (status = 200, description = "Product updated, id preserved", body = ApiResponse),
        (status = 400, description = "Validation failed", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 422, description = "Invalid JSON body", body = ApiResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    request: Result<Json<Product>, JsonRejection>,
) -> impl IntoResponse {
    let Json(product) = match request {
        Ok(v) => v,
        Err(e) => return json_422(e, "{\"name\": ..., \"price\": ..., \"stock\": ...}").into_response(),
    };
    match state.products.update(id, product).await {
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
    path = "/api/products/{id}",
    params(("id" = i64, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product deleted", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.products.delete(id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::ok(serde_json::json!({
                "message": "Product deleted successfully"
            }))),
        )
            .into_response(),
        Err(e) => error_response(e).into_response(),
    }
}
