//! Draft buffers for the add-product and add-seller forms.
//!
//! A draft holds not-yet-submitted form state. Validity is a pure function
//! of the current buffer, recomputed on every read; an invalid draft blocks
//! submission silently (the validity flag is the only signal, per the
//! error-handling design).

use rust_decimal::Decimal;

/// Transient form state for a new catalog product.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    /// Display name; must be non-blank after trimming.
    pub name: String,
    /// Unit price; must be present and strictly positive.
    pub price: Option<Decimal>,
    /// Initial stock; must be present and non-negative.
    pub stock: Option<i64>,
    /// Image URL; must be non-blank after trimming.
    pub image_url: String,
}

impl ProductDraft {
    /// Whether every field passes its predicate.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty()
            && self.price.is_some_and(|price| price > Decimal::ZERO)
            && self.stock.is_some_and(|stock| stock >= 0)
            && !self.image_url.trim().is_empty()
    }
}

/// Transient form state for a new seller account.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SellerDraft {
    /// Display name; must be non-blank after trimming.
    pub name: String,
    /// Login username; must be non-blank after trimming.
    pub username: String,
}

impl SellerDraft {
    /// Whether every field passes its predicate.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.username.trim().is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn complete_product_draft() -> ProductDraft {
        ProductDraft {
            name: "Taza de Cerámica".to_owned(),
            price: Some(Decimal::new(1299, 2)),
            stock: Some(10),
            image_url: "https://picsum.photos/id/30/400/300".to_owned(),
        }
    }

    #[test]
    fn test_complete_product_draft_is_valid() {
        assert!(complete_product_draft().is_valid());
    }

    #[test]
    fn test_product_price_zero_is_invalid() {
        let mut draft = complete_product_draft();
        draft.price = Some(Decimal::ZERO);
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_product_price_one_cent_is_valid() {
        let mut draft = complete_product_draft();
        draft.price = Some(Decimal::new(1, 2));
        assert!(draft.is_valid());
    }

    #[test]
    fn test_product_missing_price_is_invalid() {
        let mut draft = complete_product_draft();
        draft.price = None;
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_product_stock_zero_is_valid_but_negative_is_not() {
        let mut draft = complete_product_draft();
        draft.stock = Some(0);
        assert!(draft.is_valid());

        draft.stock = Some(-1);
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_product_blank_name_or_image_is_invalid() {
        let mut draft = complete_product_draft();
        draft.name = "   ".to_owned();
        assert!(!draft.is_valid());

        let mut draft = complete_product_draft();
        draft.image_url = String::new();
        assert!(!draft.is_valid());
    }

    #[test]
    fn test_seller_draft_requires_both_fields() {
        let draft = SellerDraft {
            name: "Nueva Vendedora".to_owned(),
            username: "nvendedora".to_owned(),
        };
        assert!(draft.is_valid());

        let blank_name = SellerDraft {
            name: " ".to_owned(),
            username: "nvendedora".to_owned(),
        };
        assert!(!blank_name.is_valid());

        let blank_username = SellerDraft {
            name: "Nueva Vendedora".to_owned(),
            username: String::new(),
        };
        assert!(!blank_username.is_valid());
    }
}
