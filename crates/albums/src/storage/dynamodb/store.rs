//! DynamoDB record store implementation.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{
    AttributeDefinition, KeySchemaElement, KeyType, ProvisionedThroughput, ReturnValue,
    ScalarAttributeType, Tag, TableStatus as SdkTableStatus,
};
use aws_sdk_dynamodb::Client;

use albums_core::storage::{RepositoryError, Result};

use super::error::{
    map_build_error, map_create_table_error, map_delete_item_error, map_describe_table_error,
    map_get_item_error, map_put_item_error, map_scan_error,
};
use crate::storage::schema::{KeyAttribute, TableSchema};
use crate::storage::store::{Item, RecordStore, TableStatus};

/// DynamoDB storage backend.
///
/// Holds one SDK client, shared by every request for the life of the process.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
}

impl DynamoDbStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn key_element(key: &KeyAttribute, key_type: KeyType) -> Result<KeySchemaElement> {
        KeySchemaElement::builder()
            .attribute_name(&key.name)
            .key_type(key_type)
            .build()
            .map_err(map_build_error)
    }

    fn attribute_definition(key: &KeyAttribute) -> Result<AttributeDefinition> {
        AttributeDefinition::builder()
            .attribute_name(&key.name)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(map_build_error)
    }
}

#[async_trait]
impl RecordStore for DynamoDbStore {
    async fn scan_all(&self, table: &str) -> Result<Vec<Item>> {
        let mut items = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let response = self
                .client
                .scan()
                .table_name(table)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| map_scan_error(e, table))?;

            if let Some(page) = response.items {
                items.extend(page);
            }

            match response.last_evaluated_key {
                Some(key) if !key.is_empty() => {
                    tracing::trace!(table = %table, scanned = items.len(), "Continuing scan");
                    start_key = Some(key);
                }
                _ => break,
            }
        }

        Ok(items)
    }

    async fn put_item(&self, table: &str, item: Item) -> Result<()> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, table))?;

        Ok(())
    }

    async fn get_item(&self, table: &str, key: Item) -> Result<Option<Item>> {
        let result = self
            .client
            .get_item()
            .table_name(table)
            .set_key(Some(key))
            .consistent_read(true)
            .send()
            .await
            .map_err(|e| map_get_item_error(e, table))?;

        Ok(result.item.filter(|item| !item.is_empty()))
    }

    async fn delete_item(&self, table: &str, key: Item) -> Result<Option<Item>> {
        let result = self
            .client
            .delete_item()
            .table_name(table)
            .set_key(Some(key))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, table))?;

        Ok(result.attributes.filter(|old| !old.is_empty()))
    }

    async fn create_table(&self, schema: &TableSchema) -> Result<()> {
        let mut key_schema = vec![Self::key_element(&schema.partition_key, KeyType::Hash)?];
        let mut attribute_definitions = vec![Self::attribute_definition(&schema.partition_key)?];

        if let Some(sk) = &schema.sort_key {
            key_schema.push(Self::key_element(sk, KeyType::Range)?);
            attribute_definitions.push(Self::attribute_definition(sk)?);
        }

        let throughput = ProvisionedThroughput::builder()
            .read_capacity_units(schema.throughput.read_capacity_units)
            .write_capacity_units(schema.throughput.write_capacity_units)
            .build()
            .map_err(map_build_error)?;

        let tags = schema
            .tags
            .iter()
            .map(|(key, value)| {
                Tag::builder()
                    .key(key)
                    .value(value)
                    .build()
                    .map_err(map_build_error)
            })
            .collect::<Result<Vec<_>>>()?;

        self.client
            .create_table()
            .table_name(&schema.table_name)
            .set_key_schema(Some(key_schema))
            .set_attribute_definitions(Some(attribute_definitions))
            .provisioned_throughput(throughput)
            .set_tags(Some(tags))
            .send()
            .await
            .map_err(|e| map_create_table_error(e, &schema.table_name))?;

        tracing::info!(table = %schema.table_name, "Table creation requested");
        Ok(())
    }

    async fn table_status(&self, table: &str) -> Result<Option<TableStatus>> {
        let response = match self.client.describe_table().table_name(table).send().await {
            Ok(response) => response,
            Err(err) => {
                return match map_describe_table_error(err, table) {
                    RepositoryError::TableNotActive { .. } => Ok(None),
                    other => Err(other),
                }
            }
        };

        let status = match response.table().and_then(|t| t.table_status()) {
            Some(SdkTableStatus::Active) => TableStatus::Active,
            Some(SdkTableStatus::Creating) => TableStatus::Creating,
            Some(SdkTableStatus::Updating) => TableStatus::Updating,
            Some(SdkTableStatus::Deleting) => TableStatus::Deleting,
            _ => TableStatus::Unavailable,
        };

        Ok(Some(status))
    }
}
