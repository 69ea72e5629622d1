//! In-memory record store implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use albums_core::storage::{RepositoryError, Result};

use crate::storage::schema::TableSchema;
use crate::storage::store::{Item, RecordStore, TableStatus};

#[derive(Debug)]
struct Table {
    schema: TableSchema,
    items: BTreeMap<String, Item>,
}

impl Table {
    /// Builds the storage key from the schema's key attributes.
    fn key_of(&self, item: &Item) -> Result<String> {
        self.schema
            .key_names()
            .map(|name| {
                item.get(name)
                    .and_then(|v| v.as_s().ok())
                    .cloned()
                    .ok_or_else(|| {
                        RepositoryError::QueryFailed(format!(
                            "Missing key attribute {} for table {}",
                            name, self.schema.table_name
                        ))
                    })
            })
            .collect::<Result<Vec<_>>>()
            .map(|parts| parts.join("\u{0}"))
    }
}

/// In-memory storage backend.
///
/// Tables must be created before use; operations on a missing table fail
/// with `TableNotActive`, like a table that is still provisioning.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<HashMap<String, Table>>>,
}

impl InMemoryStore {
    /// Creates a store with no tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one empty, active table.
    pub fn with_table(schema: TableSchema) -> Self {
        let mut tables = HashMap::new();
        tables.insert(
            schema.table_name.clone(),
            Table {
                schema,
                items: BTreeMap::new(),
            },
        );
        Self {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    fn not_active(table: &str) -> RepositoryError {
        RepositoryError::TableNotActive {
            table: table.to_string(),
        }
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn scan_all(&self, table: &str) -> Result<Vec<Item>> {
        let tables = self.tables.read().await;
        let table = tables.get(table).ok_or_else(|| Self::not_active(table))?;
        Ok(table.items.values().cloned().collect())
    }

    async fn put_item(&self, table: &str, item: Item) -> Result<()> {
        let mut tables = self.tables.write().await;
        let table = tables
            .get_mut(table)
            .ok_or_else(|| Self::not_active(table))?;
        let key = table.key_of(&item)?;
        table.items.insert(key, item);
        Ok(())
    }

    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>> {
        let tables = self.tables.read().await;
        let table = tables.get(table).ok_or_else(|| Self::not_active(table))?;
        let key = table.key_of(&key)?;
        Ok(table.items.get(&key).cloned())
    }

    async fn delete_item(&self, table: &str, key: Item) -> Result<Option<Item>> {
        let mut tables = self.tables.write().await;
        let table = tables
            .get_mut(table)
            .ok_or_else(|| Self::not_active(table))?;
        let key = table.key_of(&key)?;
        Ok(table.items.remove(&key))
    }

    async fn create_table(&self, schema: &TableSchema) -> Result<()> {
        let mut tables = self.tables.write().await;
        if tables.contains_key(&schema.table_name) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Table",
                id: schema.table_name.clone(),
            });
        }
        tables.insert(
            schema.table_name.clone(),
            Table {
                schema: schema.clone(),
                items: BTreeMap::new(),
            },
        );
        Ok(())
    }

    async fn table_status(&self, table: &str) -> Result<Option<TableStatus>> {
        let tables = self.tables.read().await;
        Ok(tables.get(table).map(|_| TableStatus::Active))
    }
}
