pub mod memory;
pub mod postgres;
pub mod repository;

pub use memory::{MemoryRepository, MemoryStore};
pub use postgres::{PgCategoryRepository, PgProductRepository};
pub use repository::Repository;
