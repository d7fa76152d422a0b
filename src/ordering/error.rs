//! Error types for order submission.

use thiserror::Error;

/// Why a submission attempt did not place an order.
///
/// `AuthRequired`, `SessionUnavailable`, `Validation` and `Write` are also recorded in the form as
/// `SubmissionState::Failed`. The other variants reject a call and leave the state alone.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// Nobody is signed in.
    #[error("You must be signed in to place an order")]
    AuthRequired,

    /// The session service could not be asked who is signed in.
    #[error("Could not check the session: {0}")]
    SessionUnavailable(String),

    /// A form field is missing or invalid.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The order write failed; the order was not created.
    #[error("{0}")]
    Write(String),

    /// This form already placed its order.
    #[error("Order already placed")]
    AlreadyPlaced,

    /// A write for this form has not come back yet.
    #[error("Order submission already in progress")]
    SubmissionInFlight,

    /// A write outcome was reported while no submission was in progress.
    #[error("No order submission in progress")]
    NotSubmitting,
}
