use std::str::FromStr;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::{major_to_minor, minor_to_major, Product, ProductCreate};

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ProductFormError {
    #[error("Product name is required")]
    MissingName,
    #[error("Please enter a valid price")]
    InvalidPrice,
}

/// The product editor as typed. `price` is in rupees, e.g. `"299.00"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub description: String,
    pub scent: String,
    pub photo_url: String,
}

impl ProductForm {
    /// Pre-fills the editor for an existing product.
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: minor_to_major(product.price).to_string(),
            description: product.description.clone(),
            scent: product.scent.clone(),
            photo_url: product.photo_url.clone(),
        }
    }

    /// Trims every field and converts the price to paise.
    pub fn validate(&self) -> Result<ProductCreate, ProductFormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProductFormError::MissingName);
        }

        let rupees = Decimal::from_str(self.price.trim()).map_err(|_| ProductFormError::InvalidPrice)?;
        if rupees <= Decimal::ZERO {
            return Err(ProductFormError::InvalidPrice);
        }
        let price = major_to_minor(rupees).map_err(|_| ProductFormError::InvalidPrice)?;
        if price.is_zero() {
            return Err(ProductFormError::InvalidPrice);
        }

        Ok(ProductCreate {
            name: name.to_string(),
            price,
            description: self.description.trim().to_string(),
            scent: self.scent.trim().to_string(),
            photo_url: self.photo_url.trim().to_string(),
        })
    }
}
