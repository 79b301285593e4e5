//! Process-local store: an arena plus a monotonic identifier counter
//! behind a single lock per resource type.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::error::ApiError;
use crate::domain::model::Entity;
use crate::storage::repository::Repository;

struct Inner<T> {
    rows: Vec<T>,
    next_id: i64,
}

/// In-memory store for one resource type.
///
/// Every operation holds the lock for its whole critical section, so
/// concurrent callers never observe a torn write and never receive
/// duplicate identifiers. Identifiers grow monotonically and are not
/// reused after a delete. Two stores (one per resource type) share
/// nothing, so products and categories never contend on the same lock.
pub struct MemoryStore<T> {
    inner: Mutex<Inner<T>>,
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                rows: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Snapshot of the collection, insertion order preserved.
    pub async fn list(&self) -> Vec<T> {
        self.inner.lock().await.rows.clone()
    }

    pub async fn get(&self, id: i64) -> Option<T> {
        let inner = self.inner.lock().await;
        inner.rows.iter().find(|row| row.id() == id).cloned()
    }

    /// Assigns the next identifier, appends, and returns the stored entity.
    pub async fn create(&self, mut data: T) -> T {
        let mut inner = self.inner.lock().await;
        data.set_id(inner.next_id);
        inner.next_id += 1;
        inner.rows.push(data.clone());
        data
    }

    /// Overwrites all fields but the identifier; the payload's own
    /// identifier, whatever it claims, is discarded.
    pub async fn update(&self, id: i64, mut data: T) -> Option<T> {
        let mut inner = self.inner.lock().await;
        let slot = inner.rows.iter_mut().find(|row| row.id() == id)?;
        data.set_id(id);
        *slot = data.clone();
        Some(data)
    }

    /// Removes the entity, leaving every other row's identifier and
    /// position untouched. Returns whether anything was removed.
    pub async fn delete(&self, id: i64) -> bool {
        let mut inner = self.inner.lock().await;
        let before = inner.rows.len();
        inner.rows.retain(|row| row.id() != id);
        inner.rows.len() != before
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapts [`MemoryStore`]'s `Option`-shaped results into the common
/// repository contract.
pub struct MemoryRepository<T> {
    store: MemoryStore<T>,
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            store: MemoryStore::new(),
        }
    }
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn get_all(&self) -> Result<Vec<T>, ApiError> {
        Ok(self.store.list().await)
    }

    async fn get_by_id(&self, id: i64) -> Result<T, ApiError> {
        self.store
            .get(id)
            .await
            .ok_or_else(|| ApiError::not_found(T::resource_name(), id))
    }

    async fn create(&self, data: T) -> Result<T, ApiError> {
        Ok(self.store.create(data).await)
    }

    async fn update(&self, id: i64, data: T) -> Result<T, ApiError> {
        self.store
            .update(id, data)
            .await
            .ok_or_else(|| ApiError::not_found(T::resource_name(), id))
    }

    async fn delete(&self, id: i64) -> Result<(), ApiError> {
        if self.store.delete(id).await {
            Ok(())
        } else {
            Err(ApiError::not_found(T::resource_name(), id))
        }
    }
}
