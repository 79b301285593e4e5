pub mod error;
pub mod model;

pub use error::ApiError;
pub use model::{Category, Entity, Product};
