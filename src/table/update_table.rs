use crate::common::validation;
use crate::error::Result;
use crate::index::{collection, provision::Throughput};
use crate::table::common;

use aws_sdk_dynamodb::{operation, types};

/// Options for UpdateTable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateTableOptions {
    /// Global secondary indexes to create.
    pub global_secondary_indexes: common::GlobalSecondaryIndexCollection,
    /// New throughput for existing global secondary indexes.
    pub global_secondary_index_provisions: collection::IndexProvisionCollection,
    /// Global secondary indexes to delete.
    pub global_secondary_index_names: collection::IndexNameCollection,
    /// New table throughput, unchanged when absent.
    pub throughput: Option<Throughput>,
    /// New stream settings, unchanged when absent.
    pub stream_specification: Option<types::StreamSpecification>,
}

/// Index updates in a fixed order: creations, then throughput updates, then deletions.
fn global_secondary_index_updates(
    options: &UpdateTableOptions,
) -> Result<Option<Vec<types::GlobalSecondaryIndexUpdate>>> {
    let mut updates = Vec::new();
    for index in options.global_secondary_indexes.iter() {
        updates.push(
            types::GlobalSecondaryIndexUpdate::builder()
                .create(index.to_create_action()?)
                .build(),
        );
    }
    for provision in options.global_secondary_index_provisions.iter() {
        updates.push(
            types::GlobalSecondaryIndexUpdate::builder()
                .update(provision.to_update_action()?)
                .build(),
        );
    }
    for index_name in options.global_secondary_index_names.iter() {
        let action = types::DeleteGlobalSecondaryIndexAction::builder()
            .index_name(index_name)
            .build()?;
        updates.push(
            types::GlobalSecondaryIndexUpdate::builder()
                .delete(action)
                .build(),
        );
    }
    Ok(if updates.is_empty() { None } else { Some(updates) })
}

/// Compose an UpdateTable request.
///
/// Attribute definitions are sent only for the keys of indexes being created.
pub fn build_input(
    table: &str,
    options: UpdateTableOptions,
) -> Result<operation::update_table::UpdateTableInput> {
    validation::validate_table_name(table, "table")?;
    let updates = global_secondary_index_updates(&options)?;
    let definitions = common::merge_attribute_definitions(common::global_attribute_definitions(
        &options.global_secondary_indexes,
    )?)?;
    let throughput = options
        .throughput
        .map(Throughput::to_provisioned_throughput)
        .transpose()?;
    let input = operation::update_table::UpdateTableInput::builder()
        .table_name(table)
        .set_attribute_definitions(definitions)
        .set_provisioned_throughput(throughput)
        .set_stream_specification(options.stream_specification)
        .set_global_secondary_index_updates(updates)
        .build()?;
    Ok(input)
}
