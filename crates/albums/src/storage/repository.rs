//! Album repository backed by any [`RecordStore`].

use std::sync::Arc;

use async_trait::async_trait;

use albums_core::album::Album;
use albums_core::storage::{AlbumRepository, RepositoryError, Result};

use super::conversions::{album_to_item, item_to_album};
use super::keys::album_key;
use super::store::RecordStore;

const ENTITY_TYPE: &str = "Album";

/// Implements [`AlbumRepository`] on top of a record store and table name.
#[derive(Clone)]
pub struct StoreAlbumRepository {
    store: Arc<dyn RecordStore>,
    table_name: String,
}

impl StoreAlbumRepository {
    pub fn new(store: Arc<dyn RecordStore>, table_name: impl Into<String>) -> Self {
        Self {
            store,
            table_name: table_name.into(),
        }
    }

    fn not_found(id: &str) -> RepositoryError {
        RepositoryError::NotFound {
            entity_type: ENTITY_TYPE,
            id: id.to_string(),
        }
    }
}

#[async_trait]
impl AlbumRepository for StoreAlbumRepository {
    async fn list_albums(&self) -> Result<Vec<Album>> {
        let items = self.store.scan_all(&self.table_name).await.map_err(|e| {
            tracing::error!(error = %e, table = %self.table_name, "Scan failed");
            e
        })?;

        items
            .iter()
            .map(item_to_album)
            .collect::<Result<Vec<_>>>()
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to decode stored album");
                e
            })
    }

    async fn get_album(&self, id: &str) -> Result<Album> {
        let item = self
            .store
            .get_item(&self.table_name, album_key(id))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, album_id = %id, "Error fetching album");
                e
            })?
            .ok_or_else(|| Self::not_found(id))?;

        item_to_album(&item).map_err(|e| {
            tracing::error!(error = %e, album_id = %id, "Failed to decode stored album");
            e
        })
    }

    async fn create_album(&self, album: &Album) -> Result<()> {
        self.store
            .put_item(&self.table_name, album_to_item(album))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, album_id = %album.id, "Error saving album");
                e
            })?;

        tracing::info!(album_id = %album.id, "Saved album");
        Ok(())
    }

    async fn delete_album(&self, id: &str) -> Result<()> {
        let old = self
            .store
            .delete_item(&self.table_name, album_key(id))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, album_id = %id, "Error deleting album");
                e
            })?;

        match old {
            Some(attributes) if !attributes.is_empty() => {
                tracing::info!(album_id = %id, "Deleted album");
                Ok(())
            }
            _ => Err(Self::not_found(id)),
        }
    }
}
