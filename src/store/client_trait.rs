//! # CollectionClient Trait
//!
//! Common interface for clients bound to a single collection, adding default `list` and `get`
//! methods on top of a [`StoreClient`].

use crate::store::{Document, DocumentId, StoreClient, StoreError};
use async_trait::async_trait;

/// Trait for collection-specific clients to inherit the standard read operations.
///
/// Implementors say which store and collection they talk to and how store failures map into
/// their own error type; `list` and `get` come for free.
///
/// ```rust
/// use cafe_order::store::{CollectionClient, StoreClient, StoreError};
///
/// #[derive(Debug)]
/// struct ReceiptError(String);
///
/// struct ReceiptClient { store: StoreClient }
///
/// impl CollectionClient for ReceiptClient {
///     type Error = ReceiptError;
///     fn store(&self) -> &StoreClient { &self.store }
///     fn collection(&self) -> &str { "receipts" }
///     fn map_error(e: StoreError) -> Self::Error { ReceiptError(e.to_string()) }
/// }
/// ```
#[async_trait]
pub trait CollectionClient: Send + Sync {
    /// The collection-specific error type.
    type Error: Send + Sync;

    /// Access the underlying store client.
    fn store(&self) -> &StoreClient;

    /// Name of the collection this client reads and writes.
    fn collection(&self) -> &str;

    /// Map store errors to the collection-specific error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch every document of the collection.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Document>, Self::Error> {
        tracing::debug!(collection = self.collection(), "Sending request");
        self.store()
            .list(self.collection())
            .await
            .map_err(Self::map_error)
    }

    /// Fetch a document by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: DocumentId) -> Result<Option<Document>, Self::Error> {
        tracing::debug!(collection = self.collection(), "Sending request");
        self.store()
            .get(self.collection(), id)
            .await
            .map_err(Self::map_error)
    }
}
