//! Attribute conversion functions.
//!
//! Pure functions for converting between attribute maps and albums.
//! These are testable in isolation without DynamoDB access.

use aws_sdk_dynamodb::types::AttributeValue;

use albums_core::album::Album;
use albums_core::storage::RepositoryError;

use super::keys::ID_ATTRIBUTE;
use super::store::Item;

const TITLE_ATTRIBUTE: &str = "title";
const ARTIST_ATTRIBUTE: &str = "artist";
const PRICE_ATTRIBUTE: &str = "price";

/// Convert an Album to an item. The `id` doubles as the primary key.
pub fn album_to_item(album: &Album) -> Item {
    let mut item = Item::new();

    item.insert(ID_ATTRIBUTE.to_string(), AttributeValue::S(album.id.clone()));
    item.insert(
        TITLE_ATTRIBUTE.to_string(),
        AttributeValue::S(album.title.clone()),
    );
    item.insert(
        ARTIST_ATTRIBUTE.to_string(),
        AttributeValue::S(album.artist.clone()),
    );
    item.insert(
        PRICE_ATTRIBUTE.to_string(),
        AttributeValue::N(album.price.to_string()),
    );

    item
}

/// Convert an item to an Album.
pub fn item_to_album(item: &Item) -> Result<Album, RepositoryError> {
    let id = get_string(item, ID_ATTRIBUTE)?;
    if id.is_empty() {
        return Err(RepositoryError::InvalidData(
            "Stored album has an empty id".to_string(),
        ));
    }

    Ok(Album {
        id,
        title: get_string(item, TITLE_ATTRIBUTE)?,
        artist: get_string(item, ARTIST_ATTRIBUTE)?,
        price: get_number(item, PRICE_ATTRIBUTE)?,
    })
}

/// Get a required string attribute.
fn get_string(item: &Item, key: &str) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required number attribute.
fn get_number(item: &Item, key: &str) -> Result<f64, RepositoryError> {
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("Missing or invalid field: {}", key)))?;

    raw.parse()
        .map_err(|e| RepositoryError::Serialization(format!("Invalid number {}: {}", key, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_album() -> Album {
        Album::new("Blue Train", "John Coltrane", 56.99)
            .with_id("550e8400-e29b-41d4-a716-446655440003")
    }

    #[test]
    fn test_album_to_item_fields() {
        let item = album_to_item(&sample_album());

        assert_eq!(item.len(), 4);
        assert_eq!(
            item.get("id"),
            Some(&AttributeValue::S(
                "550e8400-e29b-41d4-a716-446655440003".to_string()
            ))
        );
        assert_eq!(
            item.get("title"),
            Some(&AttributeValue::S("Blue Train".to_string()))
        );
        assert_eq!(
            item.get("artist"),
            Some(&AttributeValue::S("John Coltrane".to_string()))
        );
        assert_eq!(
            item.get("price"),
            Some(&AttributeValue::N("56.99".to_string()))
        );
    }

    #[test]
    fn test_item_to_album() {
        let album = sample_album();
        let decoded = item_to_album(&album_to_item(&album)).unwrap();
        assert_eq!(decoded, album);
    }

    #[test]
    fn test_item_to_album_ignores_extra_attributes() {
        let mut item = album_to_item(&sample_album());
        item.insert("pk".to_string(), AttributeValue::S("album#x".to_string()));

        assert!(item_to_album(&item).is_ok());
    }

    #[test]
    fn test_item_to_album_missing_field() {
        let mut item = album_to_item(&sample_album());
        item.remove("artist");

        let err = item_to_album(&item).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::InvalidData("Missing or invalid field: artist".to_string())
        );
    }

    #[test]
    fn test_item_to_album_wrong_attribute_type() {
        let mut item = album_to_item(&sample_album());
        item.insert("price".to_string(), AttributeValue::S("56.99".to_string()));

        let err = item_to_album(&item).unwrap_err();
        assert!(err.is_decoding());
    }

    #[test]
    fn test_item_to_album_unparseable_number() {
        let mut item = album_to_item(&sample_album());
        item.insert("price".to_string(), AttributeValue::N("lots".to_string()));

        assert!(matches!(
            item_to_album(&item),
            Err(RepositoryError::Serialization(_))
        ));
    }

    #[test]
    fn test_item_to_album_rejects_empty_id() {
        let item = album_to_item(&sample_album().with_id(""));
        assert!(matches!(
            item_to_album(&item),
            Err(RepositoryError::InvalidData(_))
        ));
    }
}
