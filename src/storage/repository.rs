//! Abstract repository trait: the uniform data-access contract.

use async_trait::async_trait;

use crate::domain::error::ApiError;

/// CRUD contract implemented once per storage medium.
///
/// A repository is a narrowing adapter over a store: it performs no
/// validation, holds no state of its own, and never caches results across
/// calls. Not-found and failure signals propagate unchanged.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    /// All entities, insertion order preserved.
    async fn get_all(&self) -> Result<Vec<T>, ApiError>;

    async fn get_by_id(&self, id: i64) -> Result<T, ApiError>;

    /// Stores `data` under a freshly assigned identifier and returns the
    /// stored entity.
    async fn create(&self, data: T) -> Result<T, ApiError>;

    /// Overwrites every field except the identifier, which is taken from
    /// `id` regardless of what `data` carries.
    async fn update(&self, id: i64, data: T) -> Result<T, ApiError>;

    async fn delete(&self, id: i64) -> Result<(), ApiError>;
}
