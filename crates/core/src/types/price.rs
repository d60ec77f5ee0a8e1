//! Type-safe price representation using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// The price after applying a percentage discount, rounded to two
    /// decimal places.
    ///
    /// A percentage above 100 is clamped to 100 (price of zero). Discounted
    /// prices are always derived from the base price at the point of use,
    /// never stored alongside it.
    #[must_use]
    pub fn with_discount(self, percent: u8) -> Self {
        let percent = u32::from(percent.min(100));
        let amount =
            (self.amount * Decimal::from(100 - percent) / Decimal::from(100u32)).round_dp(2);
        Self {
            amount,
            currency_code: self.currency_code,
        }
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}
