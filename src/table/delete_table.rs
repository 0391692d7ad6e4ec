use crate::common::validation;
use crate::error::Result;

use aws_sdk_dynamodb::operation;

/// Compose a DeleteTable request.
pub fn build_input(table: &str) -> Result<operation::delete_table::DeleteTableInput> {
    validation::validate_table_name(table, "table")?;
    let input = operation::delete_table::DeleteTableInput::builder()
        .table_name(table)
        .build()?;
    Ok(input)
}
