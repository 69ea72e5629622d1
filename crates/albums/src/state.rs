//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The storage backend is chosen at compile time; see
//! [`crate::storage`] for the feature flags.

use std::{sync::Arc, time::Duration};

use albums_core::storage::AlbumRepository;

use crate::config::Config;
use crate::seed::SeedPolicy;
use crate::storage::{RecordStore, StoreAlbumRepository};

/// Shared application state.
///
/// This is cloned for each request handler. The repository and the record
/// store share one underlying client.
#[derive(Clone)]
pub struct AppState {
    /// Album repository used by the CRUD handlers.
    pub albums: Arc<dyn AlbumRepository>,
    /// Raw store, for table-level operations (readiness).
    pub store: Arc<dyn RecordStore>,
    /// Name of the albums table.
    pub table_name: String,
    /// Retry policy for `/sample-data`.
    pub seed_policy: SeedPolicy,
    /// Per-request timeout applied by the router.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState over the given store and configuration.
    pub fn build(store: Arc<dyn RecordStore>, config: &Config) -> Self {
        let albums = Arc::new(StoreAlbumRepository::new(
            Arc::clone(&store),
            config.table_name.clone(),
        ));

        Self {
            albums,
            store,
            table_name: config.table_name.clone(),
            seed_policy: config.seed_policy(),
            request_timeout: config.request_timeout(),
        }
    }
}

#[cfg(feature = "dynamodb")]
mod dynamodb {
    use super::*;
    use crate::storage::dynamodb::{create_client, DynamoDbStore};

    impl AppState {
        /// Creates AppState with DynamoDB storage.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let aws_config = config.aws_config();
            tracing::info!(
                target_env = %aws_config.target_display(),
                table = %config.table_name,
                "Using DynamoDB storage"
            );

            let client = create_client(&aws_config).await;
            let store = Arc::new(DynamoDbStore::new(client));

            Ok(Self::build(store, config))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::album_table_schema;
    use crate::storage::inmemory::InMemoryStore;

    impl AppState {
        /// Creates AppState with in-memory storage.
        ///
        /// The albums table exists from the start, empty and active.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!(table = %config.table_name, "Using in-memory storage");

            let store = Arc::new(InMemoryStore::with_table(album_table_schema(
                &config.table_name,
            )));

            Ok(Self::build(store, config))
        }
    }
}
