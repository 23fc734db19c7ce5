//! Shopping cart types.

use serde::{Deserialize, Serialize};

use polimarket_core::{Price, ProductId};

/// One cart line: a product and the quantity pending checkout.
///
/// Name and price are snapshotted when the product is first added; later
/// catalog edits do not flow into existing lines. Serialized with camelCase
/// field names, the shape the persisted snapshots have always used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Product this line snapshots.
    pub product_id: ProductId,
    /// Name at add-time.
    pub name: String,
    /// Unit price at add-time.
    pub price: Price,
    /// Units pending checkout. Always >= 1; a line that would reach zero is
    /// removed instead.
    pub quantity: u32,
}

impl CartItem {
    /// Price × quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(quantity: u32) -> CartItem {
        CartItem {
            product_id: ProductId::new("p1"),
            name: "Café Colombiano".to_owned(),
            price: Price::from_minor(1550, 2),
            quantity,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item(3).line_total(), Price::from_minor(4650, 2));
    }

    #[test]
    fn test_serde_roundtrip_with_camel_case() {
        let line = item(2);
        let json = serde_json::to_string(&line).unwrap();
        assert!(json.contains("\"productId\""));

        let parsed: CartItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, line);
    }
}
