//! Typed error kinds shared by repositories and services.

use thiserror::Error;

/// Errors surfaced by the resource management layer.
///
/// Each layer passes the originating kind upward unchanged; only the
/// transport layer turns a kind into a protocol status code.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Input failed a resource rule (e.g. empty required field).
    /// Never mutates state.
    #[error("{0}")]
    Validation(String),

    /// The addressed identifier does not exist in the collection/table.
    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: i64 },

    /// Underlying storage failure (database unreachable, query failure,
    /// malformed row).
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn not_found(resource: &'static str, id: i64) -> Self {
        ApiError::NotFound { resource, id }
    }
}

// Repositories use `fetch_optional`, so `RowNotFound` never reaches this
// conversion; every sqlx failure that does is a storage fault.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Storage {
            message: err.to_string(),
        }
    }
}
