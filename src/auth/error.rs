//! Error types for the session actor.

use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    /// Sign-out was requested while nobody is signed in.
    #[error("No user is signed in")]
    NotSignedIn,

    /// The user id supplied at sign-in is unusable.
    #[error("Invalid user id: {0:?}")]
    InvalidUser(String),

    /// An error occurred while communicating with the session actor.
    #[error("Session communication error: {0}")]
    ActorCommunicationError(String),
}
