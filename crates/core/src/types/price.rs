//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the store's single display currency.
///
/// Backed by [`Decimal`] so cart arithmetic stays exact. The demo does not
/// model multiple currencies; display uses a plain `$` prefix.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a scaled integer: `from_minor(1550, 2)` is 15.50.
    #[must_use]
    pub fn from_minor(mantissa: i64, scale: u32) -> Self {
        Self(Decimal::new(mantissa, scale))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Line total for `quantity` units at this price.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|p| p.0).sum())
    }
}

impl fmt::Display for Price {
    /// Format for display (e.g., `$19.99`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("${:.2}", self.0))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let price = Price::from_minor(1550, 2);
        assert_eq!(price.amount(), Decimal::new(1550, 2));
    }

    #[test]
    fn test_times() {
        let price = Price::from_minor(875, 2);
        assert_eq!(price.times(3).amount(), Decimal::new(2625, 2));
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_minor(100, 2), Price::from_minor(250, 2)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_minor(350, 2));
    }

    #[test]
    fn test_display_two_decimal_places() {
        assert_eq!(format!("{}", Price::from_minor(1550, 2)), "$15.50");
        assert_eq!(format!("{}", Price::from_minor(22, 0)), "$22.00");
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Price::default().amount(), Decimal::ZERO);
    }
}
