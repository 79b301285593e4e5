use crate::domain::model::{Category, Product};
use crate::transport::http::handlers::{categories, health, products};
use crate::transport::http::types::ApiResponse;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::delete_product_handler,
        categories::list_categories_handler,
        categories::get_category_handler,
        categories::create_category_handler,
        categories::update_category_handler,
        categories::delete_category_handler
    ),
    components(schemas(ApiResponse, Product, Category))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/api/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/api/products/:id",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .route(
            "/api/categories",
            get(categories::list_categories_handler).post(categories::create_category_handler),
        )
        .route(
            "/api/categories/:id",
            get(categories::get_category_handler)
                .put(categories::update_category_handler)
                .delete(categories::delete_category_handler),
        )
        .with_state(app_state)
}
