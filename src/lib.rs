//! Storefront core for a small incense shop: catalog browsing, the persisted
//! order draft, checkout pricing and submission, and the product/order
//! services behind them.

pub mod actor_framework;
pub mod admin;
pub mod app_system;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod config;
pub mod domain;
pub mod draft;
pub mod order_actor;
pub mod product_actor;
pub mod shipping;

#[cfg(test)]
mod mock_framework;
