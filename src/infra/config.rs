//! Centralized configuration (environment variables + defaults).

/// Storage backend selector: `memory` (default) or `postgres`.
pub fn storage_backend() -> String {
    std::env::var("STORAGE_BACKEND").unwrap_or_else(|_| "memory".to_string())
}

/// Database URL must be provided (no default) when the postgres backend is
/// selected.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL must be set")
}

/// Listen address for the API server.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string())
}
