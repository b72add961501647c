use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{OrderId, OrderItem, OrderRequest, OrderStatus, OrderSubmissionRequest};
use crate::order_actor::OrderError;

/// Client for the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<OrderRequest>,
}

fn normalize_order(mut order: OrderRequest) -> OrderRequest {
    order.items = order
        .items
        .into_iter()
        .map(|item| OrderItem {
            product: item.product.normalized(),
            ..item
        })
        .collect();
    order
}

impl_basic_client!(OrderClient, OrderRequest, OrderId, OrderError, order_request, normalize = normalize_order);

impl OrderClient {
    #[instrument(
        skip(self, request),
        fields(item_count = request.items.len(), city = %request.delivery_address.city, shipping_fee = %request.shipping_fee)
    )]
    pub async fn submit_order_request(&self, request: OrderSubmissionRequest) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(request).await?;
        info!(order_id = id, "Order request recorded");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn update_order_status(&self, id: OrderId, status: OrderStatus) -> Result<OrderRequest, OrderError> {
        debug!("Sending request");
        Ok(normalize_order(self.inner.update(id, status).await?))
    }
}
