use crate::common::validation;
use crate::error::Result;
use crate::item::{common, primary_key::PrimaryKey};

use aws_sdk_dynamodb::operation;

/// Compose a GetItem request reading the item addressed by `key`.
pub fn build_input(
    table: &str,
    key: &PrimaryKey,
    options: common::ResponseOptions,
) -> Result<operation::get_item::GetItemInput> {
    validation::validate_table_name(table, "table")?;
    let read_input = common::ReadInput::from(options);
    let builder = operation::get_item::GetItemInput::builder()
        .table_name(table)
        .set_key(Some(key.to_attribute_values()));
    let input = common::apply_read_input!(builder, read_input).build()?;
    Ok(input)
}
