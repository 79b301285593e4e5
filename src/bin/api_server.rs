// src/bin/api_server.rs

use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use kasir_api::infra::config;
use kasir_api::storage::memory::MemoryRepository;
use kasir_api::storage::postgres::{self, PgCategoryRepository, PgProductRepository};
use kasir_api::transport;
use kasir_api::{Category, CategoryService, Product, ProductService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // --- Storage backend selection ---
    let backend = config::storage_backend();
    let app_state = match backend.as_str() {
        "postgres" => {
            let pool = postgres::connect(&config::database_url()).await?;
            postgres::ensure_schema(&pool).await?;
            tracing::info!("database connection established");
            transport::http::AppState {
                products: Arc::new(ProductService::new(Arc::new(PgProductRepository::new(
                    pool.clone(),
                )))),
                categories: Arc::new(CategoryService::new(Arc::new(PgCategoryRepository::new(
                    pool.clone(),
                )))),
                pool: Some(pool),
            }
        }
        "memory" => transport::http::AppState {
            products: Arc::new(ProductService::new(Arc::new(
                MemoryRepository::<Product>::new(),
            ))),
            categories: Arc::new(CategoryService::new(Arc::new(
                MemoryRepository::<Category>::new(),
            ))),
            pool: None,
        },
        other => anyhow::bail!("unknown STORAGE_BACKEND '{}' (use memory or postgres)", other),
    };
    tracing::info!(backend = %backend, "storage backend selected");

    // --- API server initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);

    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "API server listening");
    tracing::info!("Swagger UI available at /swagger-ui");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
