use crate::error::Result;
use crate::index::{Index, collection, key, secondary_index};

use aws_sdk_dynamodb::types;

/// Optional parts of a [`PrimaryIndex`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrimaryIndexOptions {
    /// The sort key, if any.
    pub sort_key: Option<key::SortKey>,
    /// Local secondary indexes, all sharing the table's partition key.
    pub local_secondary_indexes: collection::SecondaryIndexCollection<secondary_index::SecondaryIndex>,
}

/// The key schema of a table, with its local secondary indexes.
#[derive(Clone, Debug, PartialEq)]
pub struct PrimaryIndex {
    partition_key: key::PartitionKey,
    sort_key: Option<key::SortKey>,
    local_secondary_indexes: collection::SecondaryIndexCollection<secondary_index::SecondaryIndex>,
}

impl PrimaryIndex {
    /// Primary index on `partition_key`.
    ///
    /// ```rust
    /// use dynamodb_manager::index::{Index, key, primary_index};
    ///
    /// let partition_key = key::PartitionKey::new("id", key::ScalarType::String).unwrap();
    /// let index = primary_index::PrimaryIndex::new(partition_key, Default::default());
    /// assert_eq!(index.to_key_schema().unwrap().len(), 1);
    /// ```
    pub fn new(partition_key: key::PartitionKey, options: PrimaryIndexOptions) -> Self {
        Self {
            partition_key,
            sort_key: options.sort_key,
            local_secondary_indexes: options.local_secondary_indexes,
        }
    }

    /// Local secondary indexes in insertion order.
    pub fn local_secondary_indexes(
        &self,
    ) -> &collection::SecondaryIndexCollection<secondary_index::SecondaryIndex> {
        &self.local_secondary_indexes
    }

    /// Wire form of the local secondary indexes, `None` when there are none.
    pub fn to_local_secondary_indexes(&self) -> Result<Option<Vec<types::LocalSecondaryIndex>>> {
        if self.local_secondary_indexes.is_empty() {
            return Ok(None);
        }
        let indexes = self
            .local_secondary_indexes
            .iter()
            .map(|index| index.to_local_secondary_index(&self.partition_key))
            .collect::<Result<Vec<_>>>()?;
        Ok(Some(indexes))
    }
}

impl Index for PrimaryIndex {
    fn partition_key(&self) -> &key::PartitionKey {
        &self.partition_key
    }

    fn sort_key(&self) -> Option<&key::SortKey> {
        self.sort_key.as_ref()
    }

    fn to_attribute_definitions(&self) -> Result<Vec<types::AttributeDefinition>> {
        let mut definitions = vec![self.partition_key.to_attribute_definition()?];
        if let Some(sort_key) = &self.sort_key {
            definitions.push(sort_key.to_attribute_definition()?);
        }
        for index in self.local_secondary_indexes.iter() {
            definitions.push(index.sort_key().to_attribute_definition()?);
        }
        Ok(definitions)
    }
}
