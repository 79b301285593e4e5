//! Category business rules, delegating storage to a [`Repository`].

use std::sync::Arc;

use crate::domain::error::ApiError;
use crate::domain::model::Category;
use crate::storage::repository::Repository;

/// Validation layer for categories.
///
/// Stateless: all state lives behind the repository, and nothing is cached
/// across calls.
pub struct CategoryService {
    repo: Arc<dyn Repository<Category>>,
}

impl CategoryService {
    pub fn new(repo: Arc<dyn Repository<Category>>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> Result<Vec<Category>, ApiError> {
        self.repo.get_all().await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Category, ApiError> {
        self.repo.get_by_id(id).await
    }

    pub async fn create(&self, data: Category) -> Result<Category, ApiError> {
        validate(&data)?;
        self.repo.create(data).await
    }

    pub async fn update(&self, id: i64, data: Category) -> Result<Category, ApiError> {
        validate(&data)?;
        self.repo.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        self.repo.delete(id).await
    }
}

fn validate(data: &Category) -> Result<(), ApiError> {
    if data.name.trim().is_empty() {
        return Err(ApiError::validation("category name is required"));
    }
    Ok(())
}
