//! Key schemas, secondary indexes and projections.
//!
//! Keys compose into indexes, and indexes convert into the key schema and
//! attribute definition lists that table requests carry:
//! - [`key`] - partition and sort keys
//! - [`projection`] - attributes copied into an index
//! - [`collection`] - bounded, duplicate-free collections of names and indexes
//! - [`primary_index`] - the table's own key schema and its local indexes
//! - [`secondary_index`] - local and global secondary indexes
//! - [`provision`] - throughput and per-index throughput updates

/// Bounded collections of names, indexes and provisions.
pub mod collection;

/// Partition and sort keys.
pub mod key;

/// The key schema of a table.
pub mod primary_index;

/// Index projections.
pub mod projection;

/// Provisioned throughput.
pub mod provision;

/// Local and global secondary indexes.
pub mod secondary_index;

use crate::error::Result;

use aws_sdk_dynamodb::types;

/// A key schema: a partition key and an optional sort key.
pub trait Index {
    /// The partition key.
    fn partition_key(&self) -> &key::PartitionKey;

    /// The sort key, if any.
    fn sort_key(&self) -> Option<&key::SortKey>;

    /// Key schema, partition key first.
    fn to_key_schema(&self) -> Result<Vec<types::KeySchemaElement>> {
        let mut schema = vec![self.partition_key().to_key_schema_element()?];
        if let Some(sort_key) = self.sort_key() {
            schema.push(sort_key.to_key_schema_element()?);
        }
        Ok(schema)
    }

    /// Attribute definitions for the keys, in key schema order.
    fn to_attribute_definitions(&self) -> Result<Vec<types::AttributeDefinition>> {
        let mut definitions = vec![self.partition_key().to_attribute_definition()?];
        if let Some(sort_key) = self.sort_key() {
            definitions.push(sort_key.to_attribute_definition()?);
        }
        Ok(definitions)
    }
}
