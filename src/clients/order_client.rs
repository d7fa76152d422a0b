//! # Orders Client
//!
//! Writes placed orders to the orders collection.
use crate::model::Order;
use crate::ordering::OrderError;
use crate::store::{CollectionClient, DocumentId, StoreClient, StoreError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for the orders collection.
///
/// Validation happens before anything reaches this client; it only performs the write.
#[derive(Clone, Debug)]
pub struct OrdersClient {
    store: StoreClient,
    collection: String,
}

impl OrdersClient {
    pub fn new(store: StoreClient, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Appends one order document. The store assigns the id and `createdAt`.
    ///
    /// An error here means the order was not created.
    #[instrument(skip(self, order), fields(collection = %self.collection))]
    pub async fn place(&self, order: &Order) -> Result<DocumentId, OrderError> {
        debug!(?order, "place called");
        let document = order
            .to_document()
            .map_err(|e| OrderError::Write(e.to_string()))?;

        let id = self
            .store
            .add(&self.collection, document)
            .await
            .map_err(Self::map_error)?;
        info!(order_id = %id, "Order written");
        Ok(id)
    }
}

#[async_trait]
impl CollectionClient for OrdersClient {
    type Error = OrderError;

    fn store(&self) -> &StoreClient {
        &self.store
    }

    fn collection(&self) -> &str {
        &self.collection
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::Write(e.to_string())
    }
}
