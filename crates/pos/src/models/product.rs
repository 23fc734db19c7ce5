//! Catalog product type.

use serde::{Deserialize, Serialize};

use polimarket_core::{Price, ProductId};

/// A sellable catalog product.
///
/// Created by seed data or the add-product form; never deleted. Stock is
/// mutated only by checkout, which deliberately does not clamp at zero, so
/// the field is signed: checking out a stale cart can drive it negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique id token.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Units on hand.
    pub stock: i64,
    /// Image shown on the product card.
    pub image_url: String,
}
