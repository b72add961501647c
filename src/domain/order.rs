use std::fmt;

use super::money::Money;
use super::product::Product;

pub type OrderId = u64;

/// A product snapshot and how many of it the customer wants. Quantity is
/// never zero.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub product: Product,
    pub quantity: u32,
}

impl OrderItem {
    pub fn line_total(&self) -> Option<Money> {
        self.product.price.checked_mul(self.quantity)
    }
}

/// Delivery address. `first_line` and `city` are required at checkout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeliveryAddress {
    pub first_line: String,
    pub landmark: String,
    pub city: String,
    pub pin_code: String,
}

impl DeliveryAddress {
    /// Same address with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            first_line: self.first_line.trim().to_string(),
            landmark: self.landmark.trim().to_string(),
            city: self.city.trim().to_string(),
            pin_code: self.pin_code.trim().to_string(),
        }
    }
}

fn non_blank(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// How the customer pays, with proof for UPI payments made out of band.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentMethod {
    CashOnDelivery,
    Upi {
        reference: Option<String>,
        transaction_id: Option<String>,
    },
}

impl PaymentMethod {
    /// UPI proof with blank fields dropped.
    pub fn upi(reference: &str, transaction_id: &str) -> Self {
        PaymentMethod::Upi {
            reference: non_blank(reference),
            transaction_id: non_blank(transaction_id),
        }
    }

    /// Trims UPI proof fields and drops the blank ones.
    pub fn cleaned(&self) -> Self {
        match self {
            PaymentMethod::CashOnDelivery => PaymentMethod::CashOnDelivery,
            PaymentMethod::Upi {
                reference,
                transaction_id,
            } => PaymentMethod::upi(
                reference.as_deref().unwrap_or_default(),
                transaction_id.as_deref().unwrap_or_default(),
            ),
        }
    }

    /// Cash on delivery needs no proof; UPI needs a reference or a
    /// transaction id.
    pub fn has_valid_proof(&self) -> bool {
        match self {
            PaymentMethod::CashOnDelivery => true,
            PaymentMethod::Upi {
                reference,
                transaction_id,
            } => [reference, transaction_id]
                .iter()
                .any(|field| field.as_deref().is_some_and(|s| !s.trim().is_empty())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::InProgress,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Label shown in the admin order panel.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::InProgress => "Packed",
            OrderStatus::Shipped => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything sent to the order service when the customer submits.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmissionRequest {
    pub items: Vec<OrderItem>,
    pub customer_name: String,
    pub contact_details: String,
    pub note: Option<String>,
    pub delivery_address: DeliveryAddress,
    pub payment_method: PaymentMethod,
    pub shipping_fee: Money,
}

/// An order as recorded by the order service.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    pub customer_name: String,
    pub contact_details: String,
    pub note: Option<String>,
    pub delivery_address: DeliveryAddress,
    pub payment_method: PaymentMethod,
    pub shipping_fee: Money,
    pub status: OrderStatus,
}

impl OrderRequest {
    pub fn from_submission(id: OrderId, request: OrderSubmissionRequest) -> Self {
        Self {
            id,
            items: request.items,
            customer_name: request.customer_name,
            contact_details: request.contact_details,
            note: request.note,
            delivery_address: request.delivery_address,
            payment_method: request.payment_method,
            shipping_fee: request.shipping_fee,
            status: OrderStatus::Pending,
        }
    }
}
