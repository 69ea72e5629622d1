use async_trait::async_trait;

use crate::album::Album;

use super::Result;

/// Repository for album operations.
///
/// Implementations perform a direct round-trip to their backing store on
/// every call and hold no cached state.
#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// Lists every album in the catalog.
    ///
    /// Fails as a whole if any stored record cannot be decoded.
    async fn list_albums(&self) -> Result<Vec<Album>>;

    /// Gets an album by its ID, returning `NotFound` when absent.
    async fn get_album(&self, id: &str) -> Result<Album>;

    /// Writes an album, overwriting any existing album with the same ID.
    async fn create_album(&self, album: &Album) -> Result<()>;

    /// Deletes an album by its ID, returning `NotFound` when absent.
    async fn delete_album(&self, id: &str) -> Result<()>;
}
