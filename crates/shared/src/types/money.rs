//! Validated monetary amounts.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of decimal places stored for an amount (centavos).
pub const AMOUNT_SCALE: u32 = 2;

/// Reasons an amount is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Amount is below zero.
    #[error("Amount cannot be negative")]
    Negative,
    /// Amount has more than two decimal places.
    #[error("Amount cannot have more than {AMOUNT_SCALE} decimal places")]
    TooPrecise,
}

/// A non-negative monetary amount with at most two decimal places.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Validates and wraps a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative or too precise.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative);
        }
        let normalized = value.normalize();
        if normalized.scale() > AMOUNT_SCALE {
            return Err(AmountError::TooPrecise);
        }
        Ok(Self(normalized))
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_accepts_zero_and_positive() {
        assert!(Amount::new(dec!(0)).unwrap().is_zero());
        assert_eq!(Amount::new(dec!(1000.00)).unwrap().value(), dec!(1000));
        assert_eq!(Amount::new(dec!(12.5)).unwrap().value(), dec!(12.5));
    }

    #[test]
    fn test_amount_rejects_negative() {
        assert_eq!(Amount::new(dec!(-0.01)), Err(AmountError::Negative));
    }

    #[test]
    fn test_amount_rejects_sub_cent_precision() {
        assert_eq!(Amount::new(dec!(10.005)), Err(AmountError::TooPrecise));
        // Trailing zeros are not extra precision.
        assert!(Amount::new(dec!(10.500)).is_ok());
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(Amount::new(dec!(7)).unwrap().to_string(), "7.00");
        assert_eq!(Amount::new(dec!(1234.5)).unwrap().to_string(), "1234.50");
    }

    #[test]
    fn test_amount_deserialize_validates() {
        let ok: Amount = serde_json::from_str("\"99.90\"").unwrap();
        assert_eq!(ok.value(), dec!(99.9));
        assert!(serde_json::from_str::<Amount>("\"-1\"").is_err());
    }
}
