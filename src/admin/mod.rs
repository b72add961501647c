//! Shop owner tooling: the product editor form.

pub mod product_form;

pub use product_form::*;
