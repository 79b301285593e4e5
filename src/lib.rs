pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{CategoryService, ProductService};
pub use domain::error::ApiError;
pub use domain::model::{Category, Entity, Product};
pub use storage::memory::{MemoryRepository, MemoryStore};
pub use storage::postgres::{PgCategoryRepository, PgProductRepository};
pub use storage::repository::Repository;
