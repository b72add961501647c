use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Client for the product catalog actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductId, ProductError, product, normalize = Product::normalized);

impl ProductClient {
    #[instrument(skip(self))]
    pub async fn get_in_stock_products(&self) -> Result<Vec<Product>, ProductError> {
        let products = self.get_all_products().await?;
        Ok(products.into_iter().filter(|p| p.in_stock).collect())
    }

    #[instrument(skip(self, params), fields(name = %params.name, price = %params.price))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductId, ProductError> {
        debug!("Sending request");
        let id = self.inner.create(params).await?;
        info!(product_id = id, "Product created");
        Ok(id)
    }

    #[instrument(skip(self, params), fields(name = %params.name, price = %params.price))]
    pub async fn update_product(&self, id: ProductId, params: ProductUpdate) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, params).await?.normalized())
    }

    /// Returns the new in-stock flag.
    #[instrument(skip(self))]
    pub async fn toggle_product_stock(&self, id: ProductId) -> Result<bool, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::ToggleStock).await? {
            ProductActionResult::ToggleStock(in_stock) => Ok(in_stock),
        }
    }
}
