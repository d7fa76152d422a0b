//! # Session (Authentication) Actor
//!
//! ## Overview
//!
//! The session actor is the simplest actor in the system: no dependencies, no collections, just
//! the id of whoever is signed in. It answers the one question the order workflow needs
//! answered before writing an order.
//!
//! ## Structure
//!
//! - [`actor`] - [`SessionActor`] and its request type
//! - [`error`] - [`AuthError`] for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use cafe_order::auth;
//! use cafe_order::model::UserId;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = auth::new(8);
//!     tokio::spawn(actor.run());
//!
//!     assert_eq!(client.current_user_id().await?, None);
//!     client.sign_in(UserId::from("u1")).await?;
//!     assert_eq!(client.current_user_id().await?, Some(UserId::from("u1")));
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod error;

pub use actor::*;
pub use error::*;

use crate::clients::AuthClient;

/// Creates a new session actor and its client.
pub fn new(buffer_size: usize) -> (SessionActor, AuthClient) {
    let (actor, sender) = SessionActor::new(buffer_size);
    (actor, AuthClient::new(sender))
}
