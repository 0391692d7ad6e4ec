use crate::common::validation;
use crate::error::Result;
use crate::index::{Index, collection, key, projection, provision};

use aws_sdk_dynamodb::types;

/// A local secondary index: an alternate sort key under the table's partition key.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SecondaryIndex {
    index_name: String,
    sort_key: key::SortKey,
    projection: projection::IndexProjection,
}

impl SecondaryIndex {
    /// Validate the index name and build a local secondary index.
    ///
    /// ```rust
    /// use dynamodb_manager::index::{key, projection, secondary_index::SecondaryIndex};
    ///
    /// let sort_key = key::SortKey::new("created", key::ScalarType::String).unwrap();
    /// let index = SecondaryIndex::new("by_created", sort_key, projection::IndexProjection::keys_only());
    /// assert!(index.is_ok());
    /// ```
    pub fn new(
        index_name: impl Into<String>,
        sort_key: key::SortKey,
        projection: projection::IndexProjection,
    ) -> Result<Self> {
        let index_name = index_name.into();
        validation::validate_index_name(&index_name, "index_name")?;
        Ok(Self {
            index_name,
            sort_key,
            projection,
        })
    }

    /// The index name.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// The alternate sort key.
    pub fn sort_key(&self) -> &key::SortKey {
        &self.sort_key
    }

    /// The projection.
    pub fn projection(&self) -> &projection::IndexProjection {
        &self.projection
    }

    /// Wire form of the index, keyed under the table's `partition_key`.
    pub fn to_local_secondary_index(
        &self,
        partition_key: &key::PartitionKey,
    ) -> Result<types::LocalSecondaryIndex> {
        let index = types::LocalSecondaryIndex::builder()
            .index_name(&self.index_name)
            .key_schema(partition_key.to_key_schema_element()?)
            .key_schema(self.sort_key.to_key_schema_element()?)
            .projection(self.projection.to_projection())
            .build()?;
        Ok(index)
    }
}

impl collection::Named for SecondaryIndex {
    fn index_name(&self) -> &str {
        &self.index_name
    }
}

/// Optional parts of a [`GlobalSecondaryIndex`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct GlobalSecondaryIndexOptions {
    /// The sort key, if any.
    pub sort_key: Option<key::SortKey>,
    /// The projection, `All` by default.
    pub projection: projection::IndexProjection,
    /// The throughput, 5 read and 5 write capacity units by default.
    pub throughput: provision::Throughput,
}

/// A global secondary index: its own key schema and throughput.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlobalSecondaryIndex {
    index_name: String,
    partition_key: key::PartitionKey,
    sort_key: Option<key::SortKey>,
    projection: projection::IndexProjection,
    throughput: provision::Throughput,
}

impl GlobalSecondaryIndex {
    /// Validate the index name and build a global secondary index.
    pub fn new(
        index_name: impl Into<String>,
        partition_key: key::PartitionKey,
        options: GlobalSecondaryIndexOptions,
    ) -> Result<Self> {
        let index_name = index_name.into();
        validation::validate_index_name(&index_name, "index_name")?;
        Ok(Self {
            index_name,
            partition_key,
            sort_key: options.sort_key,
            projection: options.projection,
            throughput: options.throughput,
        })
    }

    /// The index name.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    /// The projection.
    pub fn projection(&self) -> &projection::IndexProjection {
        &self.projection
    }

    /// The throughput.
    pub fn throughput(&self) -> provision::Throughput {
        self.throughput
    }

    /// Wire form of the index, as sent when creating a table.
    pub fn to_global_secondary_index(&self) -> Result<types::GlobalSecondaryIndex> {
        let index = types::GlobalSecondaryIndex::builder()
            .index_name(&self.index_name)
            .set_key_schema(Some(self.to_key_schema()?))
            .projection(self.projection.to_projection())
            .provisioned_throughput(self.throughput.to_provisioned_throughput()?)
            .build()?;
        Ok(index)
    }

    pub(crate) fn to_create_action(&self) -> Result<types::CreateGlobalSecondaryIndexAction> {
        let action = types::CreateGlobalSecondaryIndexAction::builder()
            .index_name(&self.index_name)
            .set_key_schema(Some(self.to_key_schema()?))
            .projection(self.projection.to_projection())
            .provisioned_throughput(self.throughput.to_provisioned_throughput()?)
            .build()?;
        Ok(action)
    }
}

impl Index for GlobalSecondaryIndex {
    fn partition_key(&self) -> &key::PartitionKey {
        &self.partition_key
    }

    fn sort_key(&self) -> Option<&key::SortKey> {
        self.sort_key.as_ref()
    }
}

impl collection::Named for GlobalSecondaryIndex {
    fn index_name(&self) -> &str {
        &self.index_name
    }
}
