use tracing::{error, info};
use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::app_system::ConnectionMonitor;
use crate::clients::{OrderClient, ProductClient};
use crate::config::AppConfig;
use crate::domain::{OrderRequest, Product};

/// The storefront's view of the backend: product and order actors, their
/// clients and the readiness monitor.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct StoreSystem {
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    pub connection: ConnectionMonitor,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    pub fn new(config: &AppConfig) -> Self {
        let (product_actor, product_inner) =
            ResourceActor::<Product>::new(config.actor_buffer_size, sequential_ids());
        let product_client = ProductClient::new(product_inner);
        let product_handle = tokio::spawn(product_actor.run());

        let (order_actor, order_inner) =
            ResourceActor::<OrderRequest>::new(config.actor_buffer_size, sequential_ids());
        let order_client = OrderClient::new(order_inner);
        let order_handle = tokio::spawn(order_actor.run());

        let connection = ConnectionMonitor::new(product_client.clone(), config.connect_timeout());

        info!(buffer_size = config.actor_buffer_size, "Store system started");
        Self {
            product_client,
            order_client,
            connection,
            handles: vec![product_handle, order_handle],
        }
    }

    /// Drops every client handle held here and waits for the actors to stop.
    /// Clones handed out elsewhere must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        let Self {
            product_client,
            order_client,
            connection,
            handles,
        } = self;
        drop(connection);
        drop(product_client);
        drop(order_client);

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
