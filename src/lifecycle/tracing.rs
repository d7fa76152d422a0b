//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//! Module paths are hidden (`with_target(false)`); spans carry the context instead.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: store and session startup, shutdown with the final document count
//! - **Catalog loads**: loaded and dropped record counts, one warning per malformed record
//! - **Submissions**: validation failures, the written order id, write errors
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! # Full order payloads at the start of each submission
//! RUST_LOG=debug cargo run
//!
//! # Only the ordering layer
//! RUST_LOG=cafe_order::ordering=debug cargo run
//! ```
//!
//! At `debug` the workflow logs the order it is about to write once, with `?order`:
//!
//! ```text
//! DEBUG submit: Submitting order=Order { user_id: UserId("u1"), item_id: ItemId("latte"), .. }
//! INFO submit:place: Order written order_id=4f1c..
//! INFO submit: Order placed order_id=4f1c..
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
