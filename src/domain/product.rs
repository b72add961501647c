use super::money::{normalize_to_minor_units, Money};

pub type ProductId = u64;

/// A catalog product as served by the product service.
///
/// `price` is in paise but may arrive in legacy rupee units; see
/// [`Product::normalized`].
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub scent: String,
    pub in_stock: bool,
    pub photo_url: String,
    pub price: Money,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            scent: String::new(),
            in_stock: true,
            photo_url: String::new(),
            price,
        }
    }

    pub fn with_scent(mut self, scent: impl Into<String>) -> Self {
        self.scent = scent.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Same product with its price run through the legacy-unit heuristic.
    pub fn normalized(mut self) -> Self {
        self.price = normalize_to_minor_units(self.price);
        self
    }
}

/// Payload for creating a product. Also used as the full replacement on update.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: String,
    pub price: Money,
    pub description: String,
    pub scent: String,
    pub photo_url: String,
}

pub type ProductUpdate = ProductCreate;
