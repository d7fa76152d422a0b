//! # Café Order
//!
//! > **The ordering core of a café app: menu, order form, order submission.**
//!
//! A signed-in user browses a menu loaded from a remote document store, picks a drink, chooses a
//! size, quantity and delivery address, and submits. Submission validates the form, writes one
//! order document and tells the caller which screen comes next.
//!
//! ## 🏗️ Design
//!
//! ### Actors for the remote services
//! The document store and the authentication session are each a Tokio task that owns its state
//! and answers requests from an `mpsc` channel, one at a time. Callers never see the channels;
//! they use cloneable clients whose methods return `Result`s.
//!
//! ### Navigation as a value
//! Nothing in this crate switches screens. The workflow and the session client return a
//! [`NavigationIntent`](navigation::NavigationIntent) and the caller applies it to its own
//! [`NavigationState`](navigation::NavigationState).
//!
//! ### Typed errors per concern
//! `StoreError`, `AuthError`, `FetchError`, `OrderError` and `ConfigError` are `thiserror`
//! enums. Clients convert store errors into their own concern's error.
//!
//! ### Observability
//! `tracing` spans wrap each client call and submission. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Store ([`store`])
//! The document store actor, its client, the [`CollectionClient`](store::CollectionClient) trait
//! and a scriptable [`MockStore`](store::mock::MockStore) for tests.
//!
//! ### 2. The Session ([`auth`])
//! Who is signed in.
//!
//! ### 3. The Interface ([`clients`])
//! [`CatalogLoader`](clients::CatalogLoader), [`OrdersClient`](clients::OrdersClient) and
//! [`AuthClient`](clients::AuthClient).
//!
//! ### 4. The Domain ([`model`], [`ordering`], [`navigation`])
//! Items and orders, the order form and its submission workflow, and screen state.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Configuration, tracing setup and [`CafeSystem`](lifecycle::CafeSystem), which starts the
//! actors and hands out clients.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! cargo test
//! ```

pub mod auth;
pub mod clients;
pub mod lifecycle;
pub mod model;
pub mod navigation;
pub mod ordering;
pub mod store;
