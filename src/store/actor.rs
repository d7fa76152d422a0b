//! # Document Store Actor
//!
//! The `StoreActor` is the server side of the document store. It owns every collection and
//! processes requests sequentially, so a single `Add` is atomic with respect to every other
//! request without any locking.

use crate::store::client::StoreClient;
use crate::store::document::{Document, DocumentId, Fields, NewDocument};
use crate::store::error::StoreError;
use crate::store::message::StoreRequest;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns the document collections.
///
/// Documents inside a collection keep their insertion order; `List` returns them in that
/// order, which is the "store-provided order" callers rely on.
///
/// # Usage Pattern
///
/// 1.  **Create**: `StoreActor::new()` returns the actor and its client.
/// 2.  **Seed** (optional): pre-populate collections with [`StoreActor::seed`].
/// 3.  **Run**: spawn `actor.run()` in a background task.
///
/// ```rust
/// use cafe_order::store::StoreActor;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() {
///     let (mut actor, client) = StoreActor::new(10);
///     actor.seed("drinks", json!({"name": "Latte", "price": 4.5})).unwrap();
///     tokio::spawn(actor.run());
///
///     let drinks = client.list("drinks").await.unwrap();
///     assert_eq!(drinks.len(), 1);
/// }
/// ```
pub struct StoreActor {
    receiver: mpsc::Receiver<StoreRequest>,
    collections: HashMap<String, Vec<Document>>,
}

impl StoreActor {
    /// Creates a new `StoreActor` and its associated `StoreClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; when it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            collections: HashMap::new(),
        };
        (actor, StoreClient::new(sender))
    }

    /// Inserts a document before the actor starts running.
    pub fn seed(&mut self, collection: &str, fields: Value) -> Result<DocumentId, StoreError> {
        self.insert(collection, NewDocument::new(fields))
    }

    /// Number of documents across all collections.
    pub fn len(&self) -> usize {
        self.collections.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&mut self, collection: &str, document: NewDocument) -> Result<DocumentId, StoreError> {
        let mut fields: Fields = match document.fields {
            Value::Object(map) => map,
            other => {
                return Err(StoreError::Rejected(format!(
                    "document fields must be an object, got {}",
                    other
                )))
            }
        };

        if !document.server_timestamps.is_empty() {
            let now = Value::String(chrono::Utc::now().to_rfc3339());
            for field in document.server_timestamps {
                fields.insert(field, now.clone());
            }
        }

        let id = DocumentId::generate();
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(Document::new(id.clone(), fields));
        Ok(id)
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        info!(collections = self.collections.len(), "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::List {
                    collection,
                    respond_to,
                } => {
                    let documents = self
                        .collections
                        .get(&collection)
                        .cloned()
                        .unwrap_or_default();
                    debug!(%collection, count = documents.len(), "List");
                    let _ = respond_to.send(Ok(documents));
                }
                StoreRequest::Add {
                    collection,
                    document,
                    respond_to,
                } => {
                    debug!(%collection, ?document, "Add");
                    match self.insert(&collection, document) {
                        Ok(id) => {
                            let size = self.collections.get(&collection).map_or(0, Vec::len);
                            info!(%collection, %id, size, "Added");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(%collection, error = %e, "Add failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                StoreRequest::Get {
                    collection,
                    id,
                    respond_to,
                } => {
                    let document = self
                        .collections
                        .get(&collection)
                        .and_then(|docs| docs.iter().find(|doc| doc.id == id))
                        .cloned();
                    debug!(%collection, %id, found = document.is_some(), "Get");
                    let _ = respond_to.send(Ok(document));
                }
            }
        }

        info!(size = self.len(), "Shutdown");
    }
}
