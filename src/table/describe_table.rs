use crate::common::validation;
use crate::error::Result;

use aws_sdk_dynamodb::operation;

/// Compose a DescribeTable request.
pub fn build_input(table: &str) -> Result<operation::describe_table::DescribeTableInput> {
    validation::validate_table_name(table, "table")?;
    let input = operation::describe_table::DescribeTableInput::builder()
        .table_name(table)
        .build()?;
    Ok(input)
}
