//! # Store Errors
//!
//! Errors raised by the document store actor and its client. Concern-specific errors
//! (`FetchError`, `OrderError`) are mapped from these at the client boundary.

/// Errors that can occur while talking to the document store.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Store closed")]
    ActorClosed,
    #[error("Store dropped response channel")]
    ActorDropped,
    #[error("Write rejected: {0}")]
    Rejected(String),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}
