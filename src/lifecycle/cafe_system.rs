use crate::auth;
use crate::clients::{AuthClient, CatalogLoader, OrdersClient};
use crate::lifecycle::CafeConfig;
use crate::model::Item;
use crate::ordering::{OrderForm, OrderWorkflow};
use crate::store::{StoreActor, StoreClient, StoreError};
use serde_json::Value;
use tracing::{error, info};

/// Starts the store and session actors and hands out the clients built on them.
///
/// # Example
///
/// ```rust
/// use cafe_order::lifecycle::{CafeConfig, CafeSystem};
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let drinks = vec![json!({"name": "Latte", "price": 4.99, "sizes": ["Small", "Large"]})];
///     let system = CafeSystem::with_seed(CafeConfig::default(), drinks)?;
///
///     let items = system.catalog_loader().load_items().await?;
///     assert_eq!(items.len(), 1);
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct CafeSystem {
    pub store_client: StoreClient,
    pub auth_client: AuthClient,
    config: CafeConfig,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    /// Starts the system with empty collections and nobody signed in.
    pub fn new(config: CafeConfig) -> Self {
        let (store_actor, store_client) = StoreActor::new(config.channel_capacity);
        Self::start(config, store_actor, store_client)
    }

    /// Starts the system with `drinks` already in the drinks collection, in that order.
    pub fn with_seed(config: CafeConfig, drinks: Vec<Value>) -> Result<Self, StoreError> {
        let (mut store_actor, store_client) = StoreActor::new(config.channel_capacity);
        for fields in drinks {
            store_actor.seed(&config.drinks_collection, fields)?;
        }
        Ok(Self::start(config, store_actor, store_client))
    }

    fn start(config: CafeConfig, store_actor: StoreActor, store_client: StoreClient) -> Self {
        let (session_actor, auth_client) = auth::new(config.channel_capacity);

        let store_handle = tokio::spawn(store_actor.run());
        let session_handle = tokio::spawn(session_actor.run());

        Self {
            store_client,
            auth_client,
            config,
            handles: vec![store_handle, session_handle],
        }
    }

    pub fn config(&self) -> &CafeConfig {
        &self.config
    }

    pub fn catalog_loader(&self) -> CatalogLoader {
        CatalogLoader::new(self.store_client.clone(), &self.config.drinks_collection)
    }

    pub fn orders_client(&self) -> OrdersClient {
        OrdersClient::new(self.store_client.clone(), &self.config.orders_collection)
    }

    /// Opens the detail screen's workflow for `item`.
    pub fn order_workflow(&self, item: Item) -> OrderWorkflow {
        OrderWorkflow::new(
            OrderForm::new(item),
            self.orders_client(),
            self.auth_client.clone(),
        )
        .with_trim_address(self.config.trim_address)
    }

    /// Closes the actors' channels and waits for both tasks to finish.
    ///
    /// Loaders, order clients and workflows hold their own channel handles; drop them first or
    /// this waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.store_client);
        drop(self.auth_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
