use tracing::{debug, info, instrument, warn};

use super::persisted;
use super::storage::{DraftStorage, StorageError};
use crate::checkout::pricing;
use crate::domain::{Money, OrderItem, Product, ProductId};

/// The customer's unsubmitted order, persisted after every change.
///
/// One store per session; it is handed to whoever needs it by reference.
pub struct OrderDraftStore {
    items: Vec<OrderItem>,
    storage: Box<dyn DraftStorage>,
}

impl OrderDraftStore {
    /// Hydrates from `storage`. Missing or unreadable data gives an empty
    /// draft.
    #[instrument(name = "load_draft", skip(storage))]
    pub fn load(storage: impl DraftStorage + 'static) -> Self {
        let items = match storage.read() {
            Ok(Some(blob)) => persisted::decode(&blob).unwrap_or_else(|e| {
                warn!(error = %e, "Stored draft is corrupt, starting empty");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read stored draft, starting empty");
                Vec::new()
            }
        };
        info!(item_count = items.len(), "Draft loaded");
        Self {
            items,
            storage: Box::new(storage),
        }
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of line totals, `None` on overflow.
    pub fn subtotal(&self) -> Option<Money> {
        pricing::subtotal(&self.items)
    }

    #[instrument(skip(self, product), fields(product_id = product.id))]
    pub fn add_item(&mut self, product: Product, quantity: u32) {
        if quantity == 0 {
            warn!("Ignoring add with zero quantity");
            return;
        }
        let product = product.normalized();
        match self.items.iter_mut().find(|item| item.product.id == product.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(quantity);
                debug!(quantity = existing.quantity, "Increased quantity");
            }
            None => {
                debug!("Added new line");
                self.items.push(OrderItem { product, quantity });
            }
        }
        self.persist();
    }

    /// A quantity of zero or less removes the line. Unknown ids are ignored.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id);
            return;
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.items.iter_mut().find(|item| item.product.id == product_id) {
            Some(item) => {
                item.quantity = quantity;
                self.persist();
            }
            None => debug!("No such line, nothing to update"),
        }
    }

    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: ProductId) {
        let before = self.items.len();
        self.items.retain(|item| item.product.id != product_id);
        if self.items.len() != before {
            self.persist();
        }
    }

    /// Empties the draft and removes the stored copy.
    #[instrument(skip(self))]
    pub fn clear_draft(&mut self) {
        self.items.clear();
        if let Err(e) = self.storage.clear() {
            warn!(error = %e, "Failed to clear stored draft");
        }
        info!("Draft cleared");
    }

    fn persist(&self) {
        if let Err(e) = self.save() {
            warn!(error = %e, "Failed to save draft");
        }
    }

    fn save(&self) -> Result<(), StorageError> {
        let blob = persisted::encode(&self.items)?;
        self.storage.write(&blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::{FileDraftStorage, MemoryDraftStorage};

    /// Storage whose writes always fail.
    struct BrokenStorage;

    impl DraftStorage for BrokenStorage {
        fn read(&self) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn write(&self, _blob: &str) -> Result<(), StorageError> {
            Err(std::io::Error::other("disk full").into())
        }

        fn clear(&self) -> Result<(), StorageError> {
            Err(StorageError::Poisoned)
        }
    }

    fn incense(id: ProductId, price: u64) -> Product {
        Product::new(id, format!("Incense {id}"), Money::from_paise(price))
    }

    fn empty_store() -> (OrderDraftStore, MemoryDraftStorage) {
        let storage = MemoryDraftStorage::new();
        (OrderDraftStore::load(storage.clone()), storage)
    }

    #[test]
    fn test_add_same_product_accumulates() {
        let (mut store, _) = empty_store();
        store.add_item(incense(1, 29900), 2);
        store.add_item(incense(1, 29900), 3);

        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].quantity, 5);
    }

    #[test]
    fn test_add_normalizes_price_and_keeps_order() {
        let (mut store, _) = empty_store();
        store.add_item(incense(2, 150), 1);
        store.add_item(incense(1, 29900), 1);

        let ids: Vec<_> = store.items().iter().map(|i| i.product.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(store.items()[0].product.price, Money::from_paise(15000));
    }

    #[test]
    fn test_add_zero_quantity_is_ignored() {
        let (mut store, storage) = empty_store();
        store.add_item(incense(1, 29900), 0);
        assert!(store.is_empty());
        assert_eq!(storage.contents(), None);
    }

    #[test]
    fn test_update_quantity() {
        let (mut store, _) = empty_store();
        store.add_item(incense(1, 29900), 1);

        store.update_quantity(1, 4);
        assert_eq!(store.items()[0].quantity, 4);

        store.update_quantity(99, 5);
        assert_eq!(store.len(), 1);

        store.update_quantity(1, 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_negative_quantity_removes() {
        let (mut store, _) = empty_store();
        store.add_item(incense(1, 29900), 2);
        store.update_quantity(1, -1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let (mut store, storage) = empty_store();
        store.add_item(incense(1, 29900), 1);
        let before = storage.contents();
        store.remove_item(42);
        assert_eq!(store.len(), 1);
        assert_eq!(storage.contents(), before);
    }

    #[test]
    fn test_every_mutation_is_persisted() {
        let (mut store, storage) = empty_store();
        store.add_item(incense(1, 29900), 2);
        store.add_item(incense(2, 15000), 1);
        store.update_quantity(2, 3);

        let reloaded = OrderDraftStore::load(storage.clone());
        assert_eq!(reloaded.items(), store.items());
        assert_eq!(reloaded.item_count(), 5);
    }

    #[test]
    fn test_clear_purges_storage() {
        let (mut store, storage) = empty_store();
        store.add_item(incense(1, 29900), 1);
        store.clear_draft();

        assert!(store.is_empty());
        assert_eq!(storage.contents(), None);
        assert!(OrderDraftStore::load(storage).is_empty());
    }

    #[test]
    fn test_corrupt_storage_loads_empty() {
        let storage = MemoryDraftStorage::with_blob("{ definitely not a draft");
        let store = OrderDraftStore::load(storage);
        assert!(store.is_empty());
    }

    #[test]
    fn test_legacy_prices_normalized_on_load() {
        let storage = MemoryDraftStorage::with_blob(
            r#"[{"product":{"id":"5","price":"299","name":"Jasmine"},"quantity":2}]"#,
        );
        let store = OrderDraftStore::load(storage);
        assert_eq!(store.items()[0].product.price, Money::from_paise(29900));
        assert_eq!(store.subtotal(), Some(Money::from_paise(59800)));
    }

    #[test]
    fn test_subtotal() {
        let (mut store, _) = empty_store();
        assert_eq!(store.subtotal(), Some(Money::ZERO));
        store.add_item(incense(1, 29900), 2);
        store.add_item(incense(2, 15000), 1);
        assert_eq!(store.subtotal(), Some(Money::from_paise(74800)));
    }

    #[test]
    fn test_file_backed_store_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = OrderDraftStore::load(FileDraftStorage::new(dir.path()));
            store.add_item(incense(3, 45000), 2);
        }
        let store = OrderDraftStore::load(FileDraftStorage::new(dir.path()));
        assert_eq!(store.items()[0].product.id, 3);
        assert_eq!(store.items()[0].quantity, 2);
    }

    #[test]
    fn test_failed_saves_keep_in_memory_draft() {
        let mut store = OrderDraftStore::load(BrokenStorage);
        store.add_item(incense(1, 29900), 2);
        store.update_quantity(1, 3);
        assert_eq!(store.items()[0].quantity, 3);

        store.clear_draft();
        assert!(store.is_empty());
    }

    #[test]
    fn test_encode_errors_convert_to_storage_error() {
        let json_error = serde_json::from_str::<u32>("nope").unwrap_err();
        let error = StorageError::from(json_error);
        assert!(matches!(error, StorageError::Encode(_)));
        assert!(error.to_string().starts_with("Encoding error"));
    }
}
