//! Domain entities for the point-of-sale resources.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Contract the stores rely on to stamp and read identifiers without
/// knowing the concrete entity.
///
/// Identifiers are assigned by the store on create and are never altered
/// afterwards; `set_id` exists so a store can overwrite whatever identifier
/// a request payload happened to carry.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Resource name used in error messages (e.g. `"product"`).
    fn resource_name() -> &'static str;

    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);
}

/// A product for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Assigned by the store; ignored when present in request payloads.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    /// Price in the smallest currency unit.
    pub price: i64,
    /// Quantity on hand.
    pub stock: i64,
}

impl Entity for Product {
    fn resource_name() -> &'static str {
        "product"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Assigned by the store; ignored when present in request payloads.
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for Category {
    fn resource_name() -> &'static str {
        "category"
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }
}
