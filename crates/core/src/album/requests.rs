//! API request types for album operations.
//!
//! Pure data types with no I/O, shared by the server and its tests.

use serde::{Deserialize, Deserializer, Serialize};

use super::error::AlbumError;
use super::operations::validate_album;
use super::types::Album;

/// Request payload for creating a new album.
///
/// Every field defaults when absent or `null` so that an omitted field
/// surfaces as a validation error rather than a parse error. Any `id` in the body is
/// ignored: the server always assigns its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateAlbumRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artist: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CreateAlbumRequest {
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Validates the payload and converts it into an album with a fresh ID.
    pub fn into_album(self) -> Result<Album, AlbumError> {
        let album = Album::new(self.title, self.artist, self.price);
        validate_album(&album)?;
        Ok(album)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_album_assigns_id() {
        let album = CreateAlbumRequest::new("Test", "Test", 9.99)
            .into_album()
            .unwrap();

        assert!(!album.id.is_empty());
        assert_eq!(album.title, "Test");
        assert_eq!(album.artist, "Test");
        assert_eq!(album.price, 9.99);
    }

    #[test]
    fn test_into_album_rejects_zero_price() {
        let result = CreateAlbumRequest::new("Test", "Test", 0.0).into_album();
        assert_eq!(result, Err(AlbumError::MissingPrice));
    }

    #[test]
    fn test_missing_fields_deserialize_to_defaults() {
        let request: CreateAlbumRequest = serde_json::from_str(r#"{"title":"Test"}"#).unwrap();

        assert_eq!(request.title, "Test");
        assert_eq!(request.artist, "");
        assert_eq!(request.price, 0.0);
        assert_eq!(request.into_album(), Err(AlbumError::MissingArtist));
    }

    #[test]
    fn test_null_price_is_missing_price() {
        let request: CreateAlbumRequest =
            serde_json::from_str(r#"{"title":"Test","artist":"Test","price":null}"#).unwrap();

        assert_eq!(request.price, 0.0);
        assert_eq!(request.into_album(), Err(AlbumError::MissingPrice));
    }

    #[test]
    fn test_null_artist_is_missing_artist() {
        let request: CreateAlbumRequest =
            serde_json::from_str(r#"{"title":"Test","artist":null,"price":9.99}"#).unwrap();

        assert_eq!(request.into_album(), Err(AlbumError::MissingArtist));
    }

    #[test]
    fn test_client_supplied_id_is_ignored() {
        let request: CreateAlbumRequest = serde_json::from_str(
            r#"{"id":"client-chosen","title":"Jeru","artist":"Gerry Mulligan","price":17.99}"#,
        )
        .unwrap();

        let album = request.into_album().unwrap();
        assert_ne!(album.id, "client-chosen");
    }

    #[test]
    fn test_wrong_types_fail_to_deserialize() {
        let result = serde_json::from_str::<CreateAlbumRequest>(r#"{"price":"free"}"#);
        assert!(result.is_err());
    }
}
