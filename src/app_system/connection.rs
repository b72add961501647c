//! Readiness of the catalog/order service as seen by the storefront.
//!
//! The monitor owns the state and publishes it on a `watch` channel;
//! checkout only ever reads it.

use std::time::{Duration, Instant};
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};

use crate::clients::ProductClient;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Connecting,
    Ready,
    Error,
}

/// Probes the service with a catalog read bounded by `timeout`.
pub struct ConnectionMonitor {
    product_client: ProductClient,
    timeout: Duration,
    state: watch::Sender<ConnectionState>,
}

impl ConnectionMonitor {
    pub fn new(product_client: ProductClient, timeout: Duration) -> Self {
        let (state, _) = watch::channel(ConnectionState::Connecting);
        Self {
            product_client,
            timeout,
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ConnectionState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> ConnectionState {
        *self.state.borrow()
    }

    /// Runs one probe and publishes the outcome. Also the retry affordance
    /// after a failed connection.
    #[instrument(name = "connect", skip(self), fields(timeout_ms = self.timeout.as_millis() as u64))]
    pub async fn connect(&self) -> ConnectionState {
        self.state.send_replace(ConnectionState::Connecting);
        let start = Instant::now();

        let next = match tokio::time::timeout(self.timeout, self.product_client.get_all_products()).await {
            Ok(Ok(products)) => {
                log_response_time(start.elapsed());
                info!(product_count = products.len(), "Service ready");
                ConnectionState::Ready
            }
            Ok(Err(e)) => {
                error!(error = %e, duration_ms = start.elapsed().as_millis() as u64, "Service probe failed");
                ConnectionState::Error
            }
            Err(_) => {
                error!("Service probe timed out - service may be blocked or unavailable");
                ConnectionState::Error
            }
        };

        self.state.send_replace(next);
        next
    }
}

fn log_response_time(duration: Duration) {
    let duration_ms = duration.as_millis() as u64;
    if duration > Duration::from_millis(100) {
        warn!(duration_ms, "Service probe slow but completed");
    } else {
        debug!(duration_ms, "Service probe completed normally");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::{sequential_ids, ResourceActor};
    use crate::domain::Product;
    use crate::mock_framework::create_mock_client;

    #[tokio::test]
    async fn test_ready_when_service_answers() {
        let (actor, inner) = ResourceActor::<Product>::new(4, sequential_ids());
        tokio::spawn(actor.run());
        let monitor = ConnectionMonitor::new(ProductClient::new(inner), Duration::from_secs(1));
        let receiver = monitor.subscribe();

        assert_eq!(*receiver.borrow(), ConnectionState::Connecting);
        assert_eq!(monitor.connect().await, ConnectionState::Ready);
        assert_eq!(*receiver.borrow(), ConnectionState::Ready);
    }

    #[tokio::test]
    async fn test_error_when_service_gone() {
        let (actor, inner) = ResourceActor::<Product>::new(4, sequential_ids());
        drop(actor);
        let monitor = ConnectionMonitor::new(ProductClient::new(inner), Duration::from_secs(1));
        assert_eq!(monitor.connect().await, ConnectionState::Error);
        assert_eq!(monitor.state(), ConnectionState::Error);
    }

    #[tokio::test]
    async fn test_error_when_service_hangs() {
        // Receiver kept alive but never answered.
        let (inner, _receiver) = create_mock_client::<Product>(4);
        let monitor = ConnectionMonitor::new(ProductClient::new(inner), Duration::from_millis(20));
        assert_eq!(monitor.connect().await, ConnectionState::Error);
    }
}
