//! On-disk layout of the draft.
//!
//! A JSON array of `{ "product": {...}, "quantity": n }` where the product's
//! `id` and `price` are decimal strings. Numbers are accepted for those two
//! fields as well when reading.

use serde::{Deserialize, Serialize};

use crate::domain::{Money, OrderItem, Product};

#[derive(Debug, Serialize, Deserialize)]
struct PersistedItem {
    product: PersistedProduct,
    quantity: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedProduct {
    #[serde(with = "decimal_string")]
    id: u64,
    #[serde(with = "decimal_string")]
    price: u64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    scent: String,
    #[serde(default = "in_stock_default")]
    in_stock: bool,
    #[serde(default)]
    photo_url: String,
}

fn in_stock_default() -> bool {
    true
}

impl From<&OrderItem> for PersistedItem {
    fn from(item: &OrderItem) -> Self {
        let product = &item.product;
        Self {
            product: PersistedProduct {
                id: product.id,
                price: product.price.paise(),
                name: product.name.clone(),
                description: product.description.clone(),
                scent: product.scent.clone(),
                in_stock: product.in_stock,
                photo_url: product.photo_url.clone(),
            },
            quantity: item.quantity,
        }
    }
}

impl From<PersistedItem> for OrderItem {
    fn from(item: PersistedItem) -> Self {
        let p = item.product;
        OrderItem {
            product: Product {
                id: p.id,
                name: p.name,
                description: p.description,
                scent: p.scent,
                in_stock: p.in_stock,
                photo_url: p.photo_url,
                price: Money::from_paise(p.price),
            }
            .normalized(),
            quantity: item.quantity,
        }
    }
}

pub fn encode(items: &[OrderItem]) -> Result<String, serde_json::Error> {
    let persisted: Vec<PersistedItem> = items.iter().map(PersistedItem::from).collect();
    serde_json::to_string(&persisted)
}

/// Parses a stored draft, re-normalizing prices. Zero-quantity entries are
/// dropped and repeated product ids are merged into the first occurrence.
pub fn decode(blob: &str) -> Result<Vec<OrderItem>, serde_json::Error> {
    let persisted: Vec<PersistedItem> = serde_json::from_str(blob)?;
    let mut items: Vec<OrderItem> = Vec::with_capacity(persisted.len());
    for item in persisted.into_iter().filter(|item| item.quantity > 0) {
        let item = OrderItem::from(item);
        match items.iter_mut().find(|existing| existing.product.id == item.product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => items.push(item),
        }
    }
    Ok(items)
}

mod decimal_string {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        Str(String),
        Num(u64),
    }

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        match StringOrNumber::deserialize(deserializer)? {
            StringOrNumber::Str(s) => s.trim().parse().map_err(D::Error::custom),
            StringOrNumber::Num(n) => Ok(n),
        }
    }
}
