use crate::common::validation;
use crate::error::Result;
use crate::index::{Index, primary_index::PrimaryIndex, provision::Throughput};
use crate::table::common;

use aws_sdk_dynamodb::{operation, types};

/// Options for CreateTable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableOptions {
    /// Global secondary indexes to create with the table.
    pub global_secondary_indexes: common::GlobalSecondaryIndexCollection,
    /// Table throughput, 5 read and 5 write capacity units by default.
    pub throughput: Throughput,
    /// Stream settings, none by default.
    ///
    /// When enabled, the view type chooses what each stream record carries.
    pub stream_specification: Option<types::StreamSpecification>,
}

/// Compose a CreateTable request for `table` keyed by `index`.
///
/// Attribute definitions cover the primary key, the sort keys of the local
/// secondary indexes and the keys of the global secondary indexes, each name
/// defined once.
///
/// ```rust
/// use dynamodb_manager::index::{key, primary_index::PrimaryIndex};
/// use dynamodb_manager::table::create_table;
///
/// let partition_key = key::PartitionKey::new("id", key::ScalarType::String).unwrap();
/// let index = PrimaryIndex::new(partition_key, Default::default());
/// let input = create_table::build_input("users", &index, Default::default()).unwrap();
/// assert_eq!(input.key_schema().len(), 1);
/// ```
pub fn build_input(
    table: &str,
    index: &PrimaryIndex,
    options: TableOptions,
) -> Result<operation::create_table::CreateTableInput> {
    validation::validate_table_name(table, "table")?;
    let mut definitions = index.to_attribute_definitions()?;
    definitions.extend(common::global_attribute_definitions(
        &options.global_secondary_indexes,
    )?);
    let global_secondary_indexes = if options.global_secondary_indexes.is_empty() {
        None
    } else {
        let indexes = options
            .global_secondary_indexes
            .iter()
            .map(|index| index.to_global_secondary_index())
            .collect::<Result<Vec<_>>>()?;
        Some(indexes)
    };
    let input = operation::create_table::CreateTableInput::builder()
        .table_name(table)
        .set_attribute_definitions(common::merge_attribute_definitions(definitions)?)
        .set_key_schema(Some(index.to_key_schema()?))
        .set_local_secondary_indexes(index.to_local_secondary_indexes()?)
        .set_global_secondary_indexes(global_secondary_indexes)
        .provisioned_throughput(options.throughput.to_provisioned_throughput()?)
        .set_stream_specification(options.stream_specification)
        .build()?;
    Ok(input)
}
