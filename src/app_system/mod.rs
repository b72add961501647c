//! System orchestration, startup, readiness and shutdown.

pub mod connection;
pub mod store_system;
pub mod telemetry;

pub use connection::*;
pub use store_system::*;
pub use telemetry::*;
