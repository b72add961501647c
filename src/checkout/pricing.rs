use crate::domain::{Money, OrderItem};
use crate::shipping::shipping_fee;

/// Sum of `price * quantity` over all lines, `None` on overflow.
pub fn subtotal(items: &[OrderItem]) -> Option<Money> {
    items
        .iter()
        .try_fold(Money::ZERO, |sum, item| sum.checked_add(item.line_total()?))
}

/// The numbers shown beside the checkout form and sent with the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutSummary {
    pub subtotal: Money,
    pub shipping: Money,
    pub total: Money,
}

impl CheckoutSummary {
    pub fn compute(items: &[OrderItem], city: &str) -> Option<Self> {
        let subtotal = subtotal(items)?;
        let shipping = shipping_fee(city);
        Some(Self {
            subtotal,
            shipping,
            total: subtotal.checked_add(shipping)?,
        })
    }

    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}
