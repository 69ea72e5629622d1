use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use serde::Serialize;

use albums_core::storage::Result;

use super::schema::TableSchema;

/// A raw record: attribute names mapped to DynamoDB attribute values.
pub type Item = HashMap<String, AttributeValue>;

/// Lifecycle state of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
    /// Archived, inaccessible, or a status this client does not know.
    Unavailable,
}

impl TableStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, TableStatus::Active)
    }
}

/// Raw item operations against a key-value table.
///
/// Every call is a single round-trip. Implementations never retry; a table
/// that is missing or still provisioning surfaces as
/// `RepositoryError::TableNotActive`, the only retryable error.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns every item in the table, following continuation keys.
    async fn scan_all(&self, table: &str) -> Result<Vec<Item>>;

    /// Inserts or overwrites an item unconditionally.
    async fn put_item(&self, table: &str, item: Item) -> Result<()>;

    /// Point lookup by primary key.
    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>>;

    /// Deletes by primary key, returning the old attributes if the item existed.
    async fn delete_item(&self, table: &str, key: Item) -> Result<Option<Item>>;

    /// Provisions a table. Creating a table that already exists is an error.
    async fn create_table(&self, schema: &TableSchema) -> Result<()>;

    /// Describes a table, returning `None` when it does not exist.
    async fn table_status(&self, table: &str) -> Result<Option<TableStatus>>;
}
