//! Type-safe wrappers around the store and session actors.

pub mod auth_client;
pub mod catalog_client;
pub mod order_client;

pub use auth_client::*;
pub use catalog_client::*;
pub use order_client::*;
