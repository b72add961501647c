use tracing::{error, info, warn, Instrument};

use storefront::admin::ProductForm;
use storefront::app_system::{setup_tracing, ConnectionState, StoreSystem};
use storefront::catalog::{available_scents, filter_products, CatalogFilter};
use storefront::checkout::{CheckoutFlow, CheckoutForm, CheckoutSummary};
use storefront::config::AppConfig;
use storefront::domain::{DeliveryAddress, OrderStatus, PaymentMethod};
use storefront::draft::{FileDraftStorage, OrderDraftStore};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_filter);

    info!(draft_dir = %config.draft_dir.display(), "Starting storefront");

    let system = StoreSystem::new(&config);
    if system.connection.connect().await != ConnectionState::Ready {
        error!("Service unavailable, giving up");
        system.shutdown().await?;
        return Err("Service unavailable".to_string());
    }

    // Seed the catalog the way the shop owner would, through the editor form.
    let span = tracing::info_span!("seed_catalog");
    async {
        let forms = [
            ("Sandalwood Sticks", "299.00", "Woody"),
            ("Rose Cones", "150", "Floral"),
            ("Oud Dhoop", "450.50", "Woody"),
        ];
        for (name, price, scent) in forms {
            let form = ProductForm {
                name: name.to_string(),
                price: price.to_string(),
                scent: scent.to_string(),
                ..Default::default()
            };
            let params = form.validate().map_err(|e| e.to_string())?;
            system
                .product_client
                .create_product(params)
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let products = system
        .product_client
        .get_in_stock_products()
        .await
        .map_err(|e| e.to_string())?;
    info!(scents = ?available_scents(&products), "Catalog loaded");

    let woody = CatalogFilter {
        search: String::new(),
        scent: Some("Woody".to_string()),
    };
    let mut draft = OrderDraftStore::load(FileDraftStorage::new(&config.draft_dir));
    for product in filter_products(&products, &woody) {
        draft.add_item(product.clone(), 2);
    }
    if let Some(rose) = products.iter().find(|p| p.name == "Rose Cones") {
        draft.add_item(rose.clone(), 1);
    }

    let form = CheckoutForm {
        customer_name: "Asha Verma".to_string(),
        contact_details: "asha@example.com".to_string(),
        note: "Please call before delivery".to_string(),
        address: DeliveryAddress {
            first_line: "14 Sector 29".to_string(),
            landmark: "Near Leisure Valley".to_string(),
            city: "Gurugram".to_string(),
            pin_code: "122001".to_string(),
        },
        payment_method: PaymentMethod::upi("", "T2410170001"),
    };
    if let Some(summary) = CheckoutSummary::compute(draft.items(), &form.address.city) {
        info!(
            subtotal = %summary.subtotal,
            shipping = %summary.shipping,
            total = %summary.total,
            merchant_upi_id = %config.merchant_upi_id,
            "Pay to merchant before submitting"
        );
    }

    let mut checkout = CheckoutFlow::new(system.order_client.clone(), system.connection.subscribe());
    let span = tracing::info_span!("checkout");
    let order_id = match checkout.submit(&mut draft, &form).instrument(span).await {
        Ok(order_id) => order_id,
        Err(e) => {
            error!(error = %e, retryable = e.is_retryable(), "Checkout failed");
            drop(checkout);
            system.shutdown().await?;
            return Err(e.user_message());
        }
    };
    info!(order_id, draft_empty = draft.is_empty(), "Order placed");

    // Shop owner side: move the order along and pull an item from sale.
    let order = system
        .order_client
        .update_order_status(order_id, OrderStatus::InProgress)
        .await
        .map_err(|e| e.to_string())?;
    info!(order_id, status = %order.status, "Order status updated");

    for order in system.order_client.get_all_order_requests().await.map_err(|e| e.to_string())? {
        info!(order_id = order.id, customer = %order.customer_name, status = %order.status, "Order");
    }

    if let Some(first) = products.first() {
        match system.product_client.toggle_product_stock(first.id).await {
            Ok(in_stock) => info!(product_id = first.id, in_stock, "Stock toggled"),
            Err(e) => warn!(error = %e, "Failed to toggle stock"),
        }
    }

    drop(checkout);
    system.shutdown().await?;

    info!("Storefront stopped");
    Ok(())
}
