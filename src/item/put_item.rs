use crate::common::{ItemOperation, validation};
use crate::error::Result;
use crate::item::{common, table_item::TableItem};

use aws_sdk_dynamodb::operation;

/// Compose a PutItem request writing `item` to `table`.
///
/// ```rust
/// use dynamodb_manager::item::{put_item, table_item::TableItem};
///
/// let item = TableItem::new().with_string("id", "1");
/// let input = put_item::build_input("users", item, Default::default()).unwrap();
/// assert_eq!(input.table_name(), Some("users"));
/// ```
pub fn build_input(
    table: &str,
    item: TableItem,
    options: common::ItemOptions,
) -> Result<operation::put_item::PutItemInput> {
    validation::validate_table_name(table, "table")?;
    let item_input = common::ItemInput::new(options, ItemOperation::Create);
    let builder = operation::put_item::PutItemInput::builder()
        .table_name(table)
        .set_item(Some(item.into_attributes()));
    let input = common::apply_item_input!(builder, item_input).build()?;
    Ok(input)
}
