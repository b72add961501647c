//! Order requests recorded by the order actor.

pub mod entity;
pub mod error;

pub use error::*;
