use thiserror::Error;

use crate::domain::{DeliveryAddress, PaymentMethod};
use crate::draft::OrderDraftStore;

/// Local problems with the checkout form. Never sent to the service.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your contact details")]
    MissingContact,
    #[error("Please enter your delivery address")]
    MissingAddress,
    #[error("Please enter your city")]
    MissingCity,
    #[error("Your order is empty")]
    EmptyDraft,
    #[error("Please enter your UPI reference or transaction ID")]
    MissingPaymentProof,
    #[error("Your order total is too large to process")]
    TotalOutOfRange,
}

/// What the customer typed on the checkout page.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub contact_details: String,
    pub note: String,
    pub address: DeliveryAddress,
    pub payment_method: PaymentMethod,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Checks the form and draft in a fixed order and reports the first problem.
pub fn validate(form: &CheckoutForm, draft: &OrderDraftStore) -> Result<(), ValidationError> {
    if is_blank(&form.customer_name) {
        return Err(ValidationError::MissingName);
    }
    if is_blank(&form.contact_details) {
        return Err(ValidationError::MissingContact);
    }
    if is_blank(&form.address.first_line) {
        return Err(ValidationError::MissingAddress);
    }
    if is_blank(&form.address.city) {
        return Err(ValidationError::MissingCity);
    }
    if draft.is_empty() {
        return Err(ValidationError::EmptyDraft);
    }
    if !form.payment_method.has_valid_proof() {
        return Err(ValidationError::MissingPaymentProof);
    }
    Ok(())
}
