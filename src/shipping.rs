//! Delivery-city shipping fee.
//!
//! Gurugram deliveries ship free; everywhere else pays a flat fee.

use crate::domain::Money;

pub const FLAT_SHIPPING_FEE: Money = Money::from_paise(8000);

/// Spellings of the free-shipping city accepted as a substring of the input.
const FREE_SHIPPING_CITY_VARIANTS: [&str; 3] = ["gurugram", "gurgram", "gurgaon"];

pub fn shipping_fee(city: &str) -> Money {
    let city = city.trim().to_lowercase();
    if FREE_SHIPPING_CITY_VARIANTS
        .iter()
        .any(|variant| city.contains(variant))
    {
        Money::ZERO
    } else {
        FLAT_SHIPPING_FEE
    }
}

pub fn is_free_shipping(city: &str) -> bool {
    shipping_fee(city).is_zero()
}
