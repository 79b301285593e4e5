//! Product business rules, delegating storage to a [`Repository`].

use std::sync::Arc;

use crate::domain::error::ApiError;
use crate::domain::model::Product;
use crate::storage::repository::Repository;

/// Validation layer for products.
///
/// Product writes are validated symmetrically with categories: blank names
/// are rejected, as are negative prices and stock levels.
pub struct ProductService {
    repo: Arc<dyn Repository<Product>>,
}

impl ProductService {
    pub fn new(repo: Arc<dyn Repository<Product>>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Product>, ApiError> {
        self.repo.get_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Product, ApiError> {
        self.repo.get_by_id(id).await
    }

    pub async fn create(&self, data: Product) -> Result<Product, ApiError> {
        validate(&data)?;
        self.repo.create(data).await
    }

    pub async fn update(&self, id: i64, data: Product) -> Result<Product, ApiError> {
        validate(&data)?;
        self.repo.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.repo.delete(id).await
    }
}

fn validate(data: &Product) -> Result<(), ApiError> {
    if data.name.trim().is_empty() {
        return Err(ApiError::validation("product name is required"));
    }
    if data.price < 0 {
        return Err(ApiError::validation("product price must not be negative"));
    }
    if data.stock < 0 {
        return Err(ApiError::validation("product stock must not be negative"));
    }
    Ok(())
}
