use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductId, ProductUpdate};
use super::actions::{ProductAction, ProductActionResult};

fn validate(params: &ProductCreate) -> Result<(), String> {
    if params.name.trim().is_empty() {
        return Err("Product name is required".to_string());
    }
    if params.price.is_zero() {
        return Err("Product price must be positive".to_string());
    }
    Ok(())
}

impl Entity for Product {
    type Id = ProductId;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    /// Creates a new, in-stock Product from creation parameters.
    ///
    /// # Errors
    /// Rejects a blank name or a zero price.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, String> {
        validate(&params)?;
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            scent: params.scent,
            in_stock: true,
            photo_url: params.photo_url,
            price: params.price,
        })
    }

    /// Replaces every editable field. Stock state is left alone.
    fn on_update(&mut self, params: ProductUpdate) -> Result<(), String> {
        validate(&params)?;
        self.name = params.name;
        self.price = params.price;
        self.description = params.description;
        self.scent = params.scent;
        self.photo_url = params.photo_url;
        Ok(())
    }

    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::ToggleStock => {
                self.in_stock = !self.in_stock;
                Ok(ProductActionResult::ToggleStock(self.in_stock))
            }
        }
    }
}
