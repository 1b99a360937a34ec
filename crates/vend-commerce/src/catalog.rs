//! Catalog entity types.
//!
//! These mirror the remote catalog API's wire shape. The cart consumes
//! fully-formed [`Product`] records handed to it by callers and never
//! mutates them; the catalog service owns them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// A product in the remote catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier (assigned by the catalog).
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price. Non-negative by catalog convention; not enforced here.
    pub price: Decimal,
    /// Full description.
    pub description: String,
    /// Free-text category label.
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Aggregate customer rating.
    pub rating: Rating,
}

impl Product {
    /// Create a product with empty descriptive fields, for callers that
    /// only care about identity and price.
    pub fn new(id: ProductId, title: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            description: String::new(),
            category: String::new(),
            image: String::new(),
            rating: Rating::default(),
        }
    }
}

/// Aggregate rating for a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average score, 0 to 5.
    pub rate: f64,
    /// Number of reviews.
    pub count: u32,
}
