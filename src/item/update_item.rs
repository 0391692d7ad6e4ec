use crate::common::{self, ItemOperation, validation};
use crate::error::Result;
use crate::item::{common as item_common, primary_key::PrimaryKey};

use aws_sdk_dynamodb::operation;

/// Compose an UpdateItem request changing the item addressed by `key`.
///
/// Without an update expression the request only touches the key, creating
/// the item when it does not exist.
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_manager::item::{common, expression::Expression, primary_key::PrimaryKey, update_item};
///
/// let key = PrimaryKey::new("id", AttributeValue::S("1".to_string())).unwrap();
/// let options = common::UpdateItemOptions {
///     update_expression: Some("SET visits = visits + :one".to_string()),
///     item_options: common::ItemOptions {
///         expression: Expression::new().with_number(":one", 1u8).unwrap(),
///         ..Default::default()
///     },
/// };
/// let input = update_item::build_input("users", &key, options).unwrap();
/// assert_eq!(input.update_expression(), Some("SET visits = visits + :one"));
/// ```
pub fn build_input(
    table: &str,
    key: &PrimaryKey,
    options: item_common::UpdateItemOptions,
) -> Result<operation::update_item::UpdateItemInput> {
    validation::validate_table_name(table, "table")?;
    let item_input = item_common::ItemInput::new(options.item_options, ItemOperation::Update);
    let builder = operation::update_item::UpdateItemInput::builder()
        .table_name(table)
        .set_key(Some(key.to_attribute_values()))
        .set_update_expression(common::non_blank(options.update_expression));
    let input = item_common::apply_item_input!(builder, item_input).build()?;
    Ok(input)
}
