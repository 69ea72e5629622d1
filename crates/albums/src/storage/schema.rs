//! Table schema configuration (pure data).

use super::keys::ID_ATTRIBUTE;

/// Declared shape of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub throughput: Throughput,
    pub tags: Vec<(String, String)>,
}

/// A string-typed key attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
}

impl KeyAttribute {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Fixed provisioned capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput {
    pub read_capacity_units: i64,
    pub write_capacity_units: i64,
}

impl TableSchema {
    /// Names of the key attributes, partition key first.
    pub fn key_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.partition_key.name.as_str())
            .chain(self.sort_key.as_ref().map(|k| k.name.as_str()))
    }
}

/// Returns the albums table schema: a single string `id` partition key with
/// 10 read and 10 write capacity units.
pub fn album_table_schema(table_name: &str) -> TableSchema {
    TableSchema {
        table_name: table_name.to_string(),
        partition_key: KeyAttribute::new(ID_ATTRIBUTE),
        sort_key: None,
        throughput: Throughput {
            read_capacity_units: 10,
            write_capacity_units: 10,
        },
        tags: vec![
            ("Important".to_string(), "NOT AT ALL".to_string()),
            ("DELETE".to_string(), "YES".to_string()),
            ("Purpose".to_string(), "Albums catalog".to_string()),
        ],
    }
}
