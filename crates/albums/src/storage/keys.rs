//! Key construction for album records.
//!
//! Albums use a single-attribute key: the `id` string. Lookups and deletes
//! address an item directly, with no read needed to find key material.

use aws_sdk_dynamodb::types::AttributeValue;

use super::store::Item;

pub const ID_ATTRIBUTE: &str = "id";

/// Primary key for an album.
pub fn album_key(id: &str) -> Item {
    Item::from([(ID_ATTRIBUTE.to_string(), AttributeValue::S(id.to_string()))])
}
