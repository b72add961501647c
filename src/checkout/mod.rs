//! Checkout: the validation gate, pricing, and order submission.

pub mod errors;
pub mod flow;
pub mod pricing;
pub mod validation;

pub use errors::*;
pub use flow::*;
pub use pricing::CheckoutSummary;
pub use validation::*;
