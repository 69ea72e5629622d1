use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An album in the catalog.
///
/// The `id` is an opaque string. Albums created through this crate get a
/// random UUID v4, but lookups never assume any particular encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

impl Album {
    /// Creates a new album with a freshly generated ID.
    pub fn new(title: impl Into<String>, artist: impl Into<String>, price: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            artist: artist.into(),
            price,
        }
    }

    /// Sets a specific ID for this album (useful for testing).
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}
