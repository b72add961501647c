//! Client-side order draft (the cart) and where it is persisted.

mod persisted;
pub mod storage;
pub mod store;

pub use storage::*;
pub use store::*;
