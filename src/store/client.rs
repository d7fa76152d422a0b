//! # Store Client
//!
//! The cloneable handle the rest of the app uses to reach the document store.

use crate::store::document::{Document, DocumentId, NewDocument};
use crate::store::error::StoreError;
use crate::store::message::StoreRequest;
use tokio::sync::{mpsc, oneshot};

/// A client for the [`StoreActor`](crate::store::StoreActor).
///
/// Holds only the sender half of the request channel, so cloning is cheap. Each call sends one
/// request and awaits the actor's answer on a fresh `oneshot` channel; from the caller's side
/// that await is the only suspension point of a remote read or write.
#[derive(Clone, Debug)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    /// Reads every document of `collection`, in store order.
    pub async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::List {
                collection: collection.to_string(),
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    /// Appends a document to `collection` and returns the id the store assigned.
    pub async fn add(
        &self,
        collection: &str,
        document: NewDocument,
    ) -> Result<DocumentId, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Add {
                collection: collection.to_string(),
                document,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn get(
        &self,
        collection: &str,
        id: DocumentId,
    ) -> Result<Option<Document>, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StoreRequest::Get {
                collection: collection.to_string(),
                id,
                respond_to,
            })
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}
