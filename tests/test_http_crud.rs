//! End-to-end CRUD over the HTTP surface, in-memory backend.
//!
//! Drives the same flow a cashier client would: seed products, read them
//! back, delete one, and exercise the validation and not-found mappings.

use std::sync::Arc;

use serde_json::json;

use kasir_api::{transport, Category, CategoryService, MemoryRepository, Product, ProductService};

async fn spawn_server() -> Result<String, Box<dyn std::error::Error>> {
    let state = transport::http::AppState {
        products: Arc::new(ProductService::new(Arc::new(
            MemoryRepository::<Product>::new(),
        ))),
        categories: Arc::new(CategoryService::new(Arc::new(
            MemoryRepository::<Category>::new(),
        ))),
        pool: None,
    };
    let router = transport::http::create_router(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    Ok(format!("http://{}", addr))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_product_crud_flow() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let health = client
        .get(format!("{}/health", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert!(health["success"].as_bool().unwrap_or(false));

    // Two creations get ids 1 and 2.
    let resp = client
        .post(format!("{}/api/products", base_url))
        .json(&json!({"name": "Pensil", "price": 2000, "stock": 100}))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let created = resp.json::<serde_json::Value>().await?;
    assert_eq!(created["data"]["id"], 1);
    assert_eq!(created["data"]["name"], "Pensil");

    let resp = client
        .post(format!("{}/api/products", base_url))
        .json(&json!({"name": "Buku", "price": 5000, "stock": 150}))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    assert_eq!(resp.json::<serde_json::Value>().await?["data"]["id"], 2);

    let listed = client
        .get(format!("{}/api/products", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let items = listed["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[1]["id"], 2);

    // Update through the path id; the payload's id claim is ignored.
    let updated = client
        .put(format!("{}/api/products/2", base_url))
        .json(&json!({"id": 7, "name": "Buku Tulis", "price": 5500, "stock": 140}))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(updated["data"]["id"], 2);
    assert_eq!(updated["data"]["name"], "Buku Tulis");

    // Delete id 1; the freed id is never handed out again.
    let resp = client
        .delete(format!("{}/api/products/1", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 200);

    let listed = client
        .get(format!("{}/api/products", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    let items = listed["data"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 2);

    let resp = client
        .post(format!("{}/api/products", base_url))
        .json(&json!({"name": "Penghapus", "price": 1000, "stock": 200}))
        .send()
        .await?;
    assert_eq!(resp.json::<serde_json::Value>().await?["data"]["id"], 3);

    // Missing ids map to 404, blank names to 400.
    let resp = client
        .get(format!("{}/api/products/99", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);

    let resp = client
        .post(format!("{}/api/products", base_url))
        .json(&json!({"name": "   ", "price": 100, "stock": 1}))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_category_validation_flow() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/api/categories", base_url))
        .json(&json!({"name": "Alat Tulis", "description": "pensil, pulpen"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);
    let created = resp.json::<serde_json::Value>().await?;
    assert_eq!(created["data"]["id"], 1);

    // Description is optional.
    let resp = client
        .post(format!("{}/api/categories", base_url))
        .json(&json!({"name": "Kertas & Buku"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 201);

    // Rejected update leaves the target untouched.
    let resp = client
        .put(format!("{}/api/categories/1", base_url))
        .json(&json!({"name": "", "description": "x"}))
        .send()
        .await?;
    assert_eq!(resp.status(), 400);

    let fetched = client
        .get(format!("{}/api/categories/1", base_url))
        .send()
        .await?
        .json::<serde_json::Value>()
        .await?;
    assert_eq!(fetched["data"]["name"], "Alat Tulis");

    // Malformed body is a 422, distinct from validation failures.
    let resp = client
        .post(format!("{}/api/categories", base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(resp.status(), 422);

    let resp = client
        .delete(format!("{}/api/categories/99", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), 404);

    Ok(())
}
