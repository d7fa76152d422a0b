//! # Mock Store & Testing Guide
//!
//! `MockStore` hands out a real [`StoreClient`] whose requests are answered from a queue of
//! expectations instead of by a [`StoreActor`](crate::store::StoreActor). Code under test cannot
//! tell the difference, which makes remote failures trivial to simulate.
//!
//! ## When to use Mocks vs the Real Store
//!
//! | Feature | MockStore | StoreActor |
//! |---------|-----------|------------|
//! | **State** | None (scripted answers) | Real collections |
//! | **Error Injection** | Easy (`return_err`) | Only rejected writes |
//! | **Use Case** | Workflow and loader logic | End-to-end flows |
//!
//! ## Example
//!
//! ```rust
//! use cafe_order::store::mock::MockStore;
//! use cafe_order::store::StoreError;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::new();
//!     mock.expect_list("drinks")
//!         .return_err(StoreError::Unavailable("offline".into()));
//!
//!     let client = mock.client();
//!     assert!(client.list("drinks").await.is_err());
//!     mock.verify();
//! }
//! ```
//!
//! ## Holding a Request In Flight
//!
//! [`create_mock_store`] gives back the raw request receiver. A test can take a request off it
//! with [`expect_add`] and keep the responder until it is ready to answer, which is how the
//! "write in flight" state of the order workflow is exercised.

use crate::store::client::StoreClient;
use crate::store::document::{Document, DocumentId, NewDocument};
use crate::store::error::StoreError;
use crate::store::message::{Response, StoreRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the answer to give it.
enum Expectation {
    List {
        collection: String,
        response: Result<Vec<Document>, StoreError>,
    },
    Add {
        collection: String,
        response: Result<DocumentId, StoreError>,
    },
    Get {
        collection: String,
        response: Result<Option<Document>, StoreError>,
    },
}

/// A write the mock received, kept for assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedWrite {
    pub collection: String,
    pub document: NewDocument,
}

/// A mock store with expectation tracking.
///
/// Expectations are consumed in order. A request that does not match the next expectation's
/// kind and collection panics the background task, which the caller observes as
/// [`StoreError::ActorDropped`].
pub struct MockStore {
    client: StoreClient,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    writes: Arc<Mutex<Vec<RecordedWrite>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let writes = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let writes_clone = writes.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                if let StoreRequest::Add {
                    collection,
                    document,
                    ..
                } = &request
                {
                    writes_clone.lock().unwrap().push(RecordedWrite {
                        collection: collection.clone(),
                        document: document.clone(),
                    });
                }

                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        StoreRequest::List {
                            collection,
                            respond_to,
                        },
                        Some(Expectation::List {
                            collection: expected,
                            response,
                        }),
                    ) if collection == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Add {
                            collection,
                            respond_to,
                            ..
                        },
                        Some(Expectation::Add {
                            collection: expected,
                            response,
                        }),
                    ) if collection == expected => {
                        let _ = respond_to.send(response);
                    }
                    (
                        StoreRequest::Get {
                            collection,
                            respond_to,
                            ..
                        },
                        Some(Expectation::Get {
                            collection: expected,
                            response,
                        }),
                    ) if collection == expected => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected request or expectation mismatch: {:?}", request);
                    }
                }
            }
        });

        Self {
            client: StoreClient::new(sender),
            expectations,
            writes,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StoreClient {
        self.client.clone()
    }

    /// Expects a `list` of `collection`.
    pub fn expect_list(&mut self, collection: &str) -> ListExpectationBuilder {
        ListExpectationBuilder {
            collection: collection.to_string(),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `add` to `collection`.
    pub fn expect_add(&mut self, collection: &str) -> AddExpectationBuilder {
        AddExpectationBuilder {
            collection: collection.to_string(),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `get` from `collection`.
    pub fn expect_get(&mut self, collection: &str) -> GetExpectationBuilder {
        GetExpectationBuilder {
            collection: collection.to_string(),
            expectations: self.expectations.clone(),
        }
    }

    /// Every `add` request received so far, whether it succeeded or not.
    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder {
    collection: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl ListExpectationBuilder {
    pub fn return_ok(self, documents: Vec<Document>) {
        self.push(Ok(documents));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Vec<Document>, StoreError>) {
        self.expectations.lock().unwrap().push_back(Expectation::List {
            collection: self.collection,
            response,
        });
    }
}

/// Builder for `add` expectations.
pub struct AddExpectationBuilder {
    collection: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl AddExpectationBuilder {
    pub fn return_ok(self, id: impl Into<DocumentId>) {
        self.push(Ok(id.into()));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<DocumentId, StoreError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Add {
            collection: self.collection,
            response,
        });
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder {
    collection: String,
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl GetExpectationBuilder {
    pub fn return_ok(self, document: Option<Document>) {
        self.push(Ok(document));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<Document>, StoreError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            collection: self.collection,
            response,
        });
    }
}

// =============================================================================
// RAW RECEIVER HELPERS
// =============================================================================

/// Creates a store client and the receiver its requests arrive on.
///
/// Nothing answers the requests until the test does, so a caller awaiting the client stays
/// suspended exactly as it would during a slow network write.
pub fn create_mock_store(buffer_size: usize) -> (StoreClient, mpsc::Receiver<StoreRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StoreClient::new(sender), receiver)
}

/// Helper to verify that the next message is an Add request.
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(String, NewDocument, Response<DocumentId>)> {
    match receiver.recv().await {
        Some(StoreRequest::Add {
            collection,
            document,
            respond_to,
        }) => Some((collection, document, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request.
pub async fn expect_list(
    receiver: &mut mpsc::Receiver<StoreRequest>,
) -> Option<(String, Response<Vec<Document>>)> {
    match receiver.recv().await {
        Some(StoreRequest::List {
            collection,
            respond_to,
        }) => Some((collection, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_store_with_raw_receiver() {
        let (client, mut receiver) = create_mock_store(10);

        let add_task = tokio::spawn(async move {
            client
                .add("orders", NewDocument::new(json!({"quantity": 2})))
                .await
        });

        let (collection, document, responder) = expect_add(&mut receiver)
            .await
            .expect("Expected Add request");
        assert_eq!(collection, "orders");
        assert_eq!(document.fields["quantity"], json!(2));
        responder.send(Ok(DocumentId::from("order_1"))).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result, Ok(DocumentId::from("order_1")));
    }

    #[tokio::test]
    async fn test_mock_store_with_expectations() {
        let mut mock = MockStore::new();
        mock.expect_add("orders").return_ok("order_1");
        mock.expect_get("orders").return_ok(None);

        let client = mock.client();
        let id = client
            .add("orders", NewDocument::new(json!({"status": "pending"})))
            .await
            .unwrap();
        assert_eq!(id, DocumentId::from("order_1"));
        assert!(client.get("orders", id).await.unwrap().is_none());

        let writes = mock.writes();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].collection, "orders");
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_collection_surfaces_as_dropped() {
        let mut mock = MockStore::new();
        mock.expect_list("drinks").return_ok(vec![]);

        let result = mock.client().list("orders").await;
        assert_eq!(result, Err(StoreError::ActorDropped));
    }
}
