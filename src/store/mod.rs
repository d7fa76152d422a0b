//! In-process document store standing in for the remote database.
//!
//! # Main Components
//!
//! - [`StoreActor`] - Owns the collections and serves requests sequentially
//! - [`StoreClient`] - Cloneable handle used by loaders and workflows
//! - [`CollectionClient`] - Trait for clients bound to one collection
//! - [`StoreError`] - Transport and write failures
//!
//! # Testing
//!
//! See [`mock`] for a scripted store that needs no actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::StoreActor;
pub use client::StoreClient;
pub use client_trait::CollectionClient;
pub use document::{Document, DocumentId, Fields, NewDocument};
pub use error::StoreError;
pub use message::{Response, StoreRequest};
