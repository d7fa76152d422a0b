//! # Catalog Loader
//!
//! Reads the drinks collection and turns it into menu [`Item`]s. Malformed records are dropped
//! one by one; only a failure of the read itself is an error.

use crate::model::Item;
use crate::store::{CollectionClient, StoreClient, StoreError};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// The catalog could not be read.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Failed to load products: {message}")]
pub struct FetchError {
    pub message: String,
}

/// Client for the drinks collection.
#[derive(Clone, Debug)]
pub struct CatalogLoader {
    store: StoreClient,
    collection: String,
}

impl CatalogLoader {
    pub fn new(store: StoreClient, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    /// Loads the menu in store order.
    ///
    /// One read, no retry: a retry is the caller invoking this again. An empty collection is
    /// `Ok(vec![])`.
    #[instrument(skip(self), fields(collection = %self.collection))]
    pub async fn load_items(&self) -> Result<Vec<Item>, FetchError> {
        let documents = self.list().await?;
        let total = documents.len();

        let items: Vec<Item> = documents
            .iter()
            .filter_map(|doc| match Item::from_document(doc) {
                Ok(item) => Some(item),
                Err(e) => {
                    warn!(id = %doc.id, error = %e, "Dropping malformed item");
                    None
                }
            })
            .collect();

        info!(loaded = items.len(), dropped = total - items.len(), "Catalog loaded");
        Ok(items)
    }
}

#[async_trait]
impl CollectionClient for CatalogLoader {
    type Error = FetchError;

    fn store(&self) -> &StoreClient {
        &self.store
    }

    fn collection(&self) -> &str {
        &self.collection
    }

    fn map_error(e: StoreError) -> Self::Error {
        FetchError {
            message: e.to_string(),
        }
    }
}

/// What the menu screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuState {
    Loading,
    /// The read failed; the screen offers a retry.
    Failed(String),
    /// The read succeeded but there is nothing to sell.
    Empty,
    Loaded(Vec<Item>),
}

impl MenuState {
    pub fn from_result(result: Result<Vec<Item>, FetchError>) -> Self {
        match result {
            Ok(items) if items.is_empty() => MenuState::Empty,
            Ok(items) => MenuState::Loaded(items),
            Err(e) => MenuState::Failed(e.to_string()),
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, MenuState::Failed(_))
    }
}
