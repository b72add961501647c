//! Money in minor units (paise) and the conversions the storefront needs.
//!
//! Prices are always carried as integer paise. `Decimal` only shows up for
//! rupee amounts typed into (or pre-filled into) an admin form.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use thiserror::Error;

/// Prices below this many paise (₹10.00) are treated as legacy rupee values.
pub const LEGACY_MAJOR_UNIT_THRESHOLD: u64 = 1000;

pub const CURRENCY_SYMBOL: &str = "₹";

const MINOR_PER_MAJOR: u64 = 100;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum MoneyError {
    #[error("Amount cannot be negative: {0}")]
    Negative(Decimal),
    #[error("Amount out of range")]
    Overflow,
}

/// An amount in paise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_paise(paise: u64) -> Self {
        Self(paise)
    }

    pub const fn paise(self) -> u64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money)
    }

    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(quantity)).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}.{:02}",
            CURRENCY_SYMBOL,
            self.0 / MINOR_PER_MAJOR,
            self.0 % MINOR_PER_MAJOR
        )
    }
}

/// Converts a price of unknown unit into paise.
///
/// Anything under [`LEGACY_MAJOR_UNIT_THRESHOLD`] is assumed to have been
/// stored in rupees and is scaled by 100; everything else is returned as is.
///
/// This is lossy: a correctly encoded price under ₹10 (say 500 paise, ₹5.00)
/// cannot be told apart from a legacy ₹500 and gets scaled to ₹500.00. Prices
/// under ₹10 are therefore not representable until the data carries a unit
/// tag.
///
/// Not idempotent for 1 to 9: the first pass gives 100 to 900 paise, which is
/// still under the threshold, so a second pass scales again. Normalize once,
/// at the edge where data comes in.
pub fn normalize_to_minor_units(price: Money) -> Money {
    if price.0 < LEGACY_MAJOR_UNIT_THRESHOLD {
        Money(price.0 * MINOR_PER_MAJOR)
    } else {
        price
    }
}

/// Normalizes and renders as `₹<rupees>.<paise>`, e.g. `₹299.00`.
pub fn format_for_display(price: Money) -> String {
    normalize_to_minor_units(price).to_string()
}

/// Converts a rupee amount typed by an admin into paise, rounding half away
/// from zero.
pub fn major_to_minor(amount: Decimal) -> Result<Money, MoneyError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(MoneyError::Negative(amount));
    }
    let scaled = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(MoneyError::Overflow)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    scaled.to_u64().map(Money).ok_or(MoneyError::Overflow)
}

/// Normalizes and converts to rupees with two decimal places, for form
/// pre-fill.
pub fn minor_to_major(price: Money) -> Decimal {
    let paise = normalize_to_minor_units(price).0;
    Decimal::from_i128_with_scale(i128::from(paise), 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_normalize_leaves_minor_unit_prices() {
        for p in [1000, 1001, 29900, 15000, u64::MAX] {
            assert_eq!(normalize_to_minor_units(Money(p)), Money(p));
        }
    }

    #[test]
    fn test_normalize_scales_legacy_prices() {
        for p in [0, 1, 299, 500, 999] {
            assert_eq!(normalize_to_minor_units(Money(p)), Money(p * 100));
        }
    }

    #[test]
    fn test_cheap_minor_unit_price_is_misread() {
        // ₹5.00 stored correctly still comes out as ₹500.00.
        assert_eq!(format_for_display(Money(500)), "₹500.00");
    }

    #[test]
    fn test_format_for_display() {
        assert_eq!(format_for_display(Money(29900)), "₹299.00");
        assert_eq!(format_for_display(Money(1005)), "₹10.05");
        assert_eq!(format_for_display(Money(299)), "₹299.00");
        assert_eq!(Money(8000).to_string(), "₹80.00");
        assert_eq!(Money::ZERO.to_string(), "₹0.00");
    }

    #[test]
    fn test_major_to_minor_rounds_half_away_from_zero() {
        assert_eq!(major_to_minor(dec("299")), Ok(Money(29900)));
        assert_eq!(major_to_minor(dec("299.99")), Ok(Money(29999)));
        assert_eq!(major_to_minor(dec("0.005")), Ok(Money(1)));
        assert_eq!(major_to_minor(dec("10.125")), Ok(Money(1013)));
        assert_eq!(major_to_minor(dec("10.124")), Ok(Money(1012)));
        assert_eq!(major_to_minor(Decimal::ZERO), Ok(Money::ZERO));
    }

    #[test]
    fn test_major_to_minor_rejects_negative() {
        assert!(matches!(major_to_minor(dec("-1")), Err(MoneyError::Negative(_))));
    }

    #[test]
    fn test_minor_to_major() {
        assert_eq!(minor_to_major(Money(29900)), dec("299.00"));
        assert_eq!(minor_to_major(Money(29900)).to_string(), "299.00");
        assert_eq!(minor_to_major(Money(150)), dec("150.00"));
    }

    #[test]
    fn test_round_trip_is_stable_after_normalizing() {
        // Holds whenever the normalized value is 0 or at least the threshold.
        for p in [0, 10, 999, 1000, 12345, 29900, 10_000_000] {
            let normalized = normalize_to_minor_units(Money(p));
            assert_eq!(major_to_minor(minor_to_major(normalized)), Ok(normalized));
        }
    }

    #[test]
    fn test_single_digit_prices_scale_twice() {
        for p in 1..=9u64 {
            let normalized = normalize_to_minor_units(Money(p));
            assert_eq!(normalized, Money(p * 100));
            assert_eq!(normalize_to_minor_units(normalized), Money(p * 10_000));
            assert_eq!(
                minor_to_major(normalized),
                Decimal::from_i128_with_scale(i128::from(p * 10_000), 2)
            );
        }
        assert_eq!(minor_to_major(normalize_to_minor_units(Money(7))), dec("700.00"));
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(Money(29900).checked_mul(2), Some(Money(59800)));
        assert_eq!(Money(59800).checked_add(Money(15000)), Some(Money(74800)));
        assert_eq!(Money(u64::MAX).checked_add(Money(1)), None);
        assert_eq!(Money(u64::MAX).checked_mul(2), None);
    }
}
