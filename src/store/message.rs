//! # Store Messages
//!
//! Requests sent from a [`StoreClient`](crate::store::StoreClient) to the
//! [`StoreActor`](crate::store::StoreActor). Every request carries a `oneshot` sender the actor
//! answers on.

use crate::store::document::{Document, DocumentId, NewDocument};
use crate::store::error::StoreError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Internal message type sent to the store actor.
///
/// The document store only needs the three operations the app performs against a remote
/// database: read a whole collection, append a document, and fetch one by id.
#[derive(Debug)]
pub enum StoreRequest {
    List {
        collection: String,
        respond_to: Response<Vec<Document>>,
    },
    Add {
        collection: String,
        document: NewDocument,
        respond_to: Response<DocumentId>,
    },
    Get {
        collection: String,
        id: DocumentId,
        respond_to: Response<Option<Document>>,
    },
}
