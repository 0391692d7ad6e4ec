use crate::common::{ItemOperation, validation};
use crate::error::Result;
use crate::item::{common, primary_key::PrimaryKey};

use aws_sdk_dynamodb::operation;

/// Compose a DeleteItem request removing the item addressed by `key`.
pub fn build_input(
    table: &str,
    key: &PrimaryKey,
    options: common::ItemOptions,
) -> Result<operation::delete_item::DeleteItemInput> {
    validation::validate_table_name(table, "table")?;
    let item_input = common::ItemInput::new(options, ItemOperation::Delete);
    let builder = operation::delete_item::DeleteItemInput::builder()
        .table_name(table)
        .set_key(Some(key.to_attribute_values()));
    let input = common::apply_item_input!(builder, item_input).build()?;
    Ok(input)
}
