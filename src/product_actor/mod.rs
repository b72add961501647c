//! Product records managed by the catalog actor, including stock toggling.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
