use crate::actor_framework::Entity;
use crate::domain::{OrderId, OrderRequest, OrderStatus, OrderSubmissionRequest};

impl Entity for OrderRequest {
    type Id = OrderId;
    type CreateParams = OrderSubmissionRequest;
    type UpdateParams = OrderStatus;
    type Action = (); // No custom actions for now
    type ActionResult = ();

    /// Records a submission as a new order in `Pending` status.
    fn from_create_params(id: OrderId, params: OrderSubmissionRequest) -> Result<Self, String> {
        Ok(Self::from_submission(id, params))
    }

    /// Rejects orders the storefront should never have sent.
    fn on_create(&mut self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("Order has no items".to_string());
        }
        if let Some(item) = self.items.iter().find(|item| item.quantity == 0) {
            return Err(format!("Zero quantity for product {}", item.product.id));
        }
        if self.customer_name.trim().is_empty() || self.contact_details.trim().is_empty() {
            return Err("Customer name and contact details are required".to_string());
        }
        Ok(())
    }

    /// Status is the only thing an admin changes on an order.
    fn on_update(&mut self, status: OrderStatus) -> Result<(), String> {
        self.status = status;
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
