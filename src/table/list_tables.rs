use crate::common::validation;
use crate::error::Result;

use aws_sdk_dynamodb::operation;

/// Smallest page size.
pub const MINIMUM_LIMIT: i32 = 1;

/// Largest page size, and the default.
pub const MAXIMUM_LIMIT: i32 = 100;

/// Options for ListTables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListTablesOptions {
    /// Name of the last table of the previous page.
    pub exclusive_start_table_name: Option<String>,
    /// Page size, clamped to [`MINIMUM_LIMIT`]..=[`MAXIMUM_LIMIT`].
    pub limit: i32,
}

impl Default for ListTablesOptions {
    fn default() -> Self {
        Self {
            exclusive_start_table_name: None,
            limit: MAXIMUM_LIMIT,
        }
    }
}

/// Compose a ListTables request.
pub fn build_input(options: ListTablesOptions) -> Result<operation::list_tables::ListTablesInput> {
    if let Some(name) = &options.exclusive_start_table_name {
        validation::validate_table_name(name, "exclusive_start_table_name")?;
    }
    let input = operation::list_tables::ListTablesInput::builder()
        .set_exclusive_start_table_name(options.exclusive_start_table_name)
        .limit(options.limit.clamp(MINIMUM_LIMIT, MAXIMUM_LIMIT))
        .build()?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::default(ListTablesOptions::default(), None, 100)]
    #[case::too_low(ListTablesOptions { limit: 0, ..Default::default() }, None, 1)]
    #[case::too_high(ListTablesOptions { limit: 500, ..Default::default() }, None, 100)]
    #[case::next_page(
        ListTablesOptions {
            exclusive_start_table_name: Some(
                "orders".to_string()
            ),
            limit: 10,
        },
        Some("orders"),
        10
    )]
    fn test_build_input(
        #[case] options: ListTablesOptions,
        #[case] expected_start: Option<&str>,
        #[case] expected_limit: i32,
    ) {
        let actual = build_input(options).unwrap();
        assert_eq!(actual.exclusive_start_table_name(), expected_start);
        assert_eq!(actual.limit(), Some(expected_limit));
    }

    #[test]
    fn test_invalid_start_table_name() {
        let options = ListTablesOptions {
            exclusive_start_table_name: Some("ab".to_string()),
            ..Default::default()
        };
        assert!(build_input(options).is_err());
    }
}
