use crate::common::{self, SelectAttributes, validation};
use crate::error::Result;
use crate::item::{common as item_common, expression::Expression, primary_key::PrimaryKey};

use aws_sdk_dynamodb::operation;

/// Smallest page size a query may ask for.
pub const MINIMUM_LIMIT: i32 = 1;

/// Options for Query.
#[derive(Clone, Debug, PartialEq)]
pub struct QueryOptions {
    /// Read options shared with GetItem and Scan.
    pub response_options: item_common::ResponseOptions,
    /// Page size, raised to [`MINIMUM_LIMIT`] when lower.
    pub limit: Option<i32>,
    /// Key of the last item of the previous page.
    pub exclusive_start_key: Option<PrimaryKey>,
    /// Ascending (`true`) or descending sort key order.
    pub scan_index_forward: bool,
    /// Secondary index to query instead of the table.
    pub index_name: Option<String>,
    /// Filter applied after the key condition.
    ///
    /// Filtered-out items still count against `limit` and consumed capacity.
    pub filter_expression: Option<String>,
    /// Which attributes to return.
    pub select_attributes: SelectAttributes,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            response_options: Default::default(),
            limit: None,
            exclusive_start_key: None,
            scan_index_forward: true,
            index_name: None,
            filter_expression: None,
            select_attributes: SelectAttributes::default(),
        }
    }
}

/// Compose a Query request.
///
/// `key_condition_expression` is required; `expression` carries the values it
/// and the filter expression reference.
///
/// ```rust
/// use dynamodb_manager::item::{expression::Expression, query};
///
/// let expression = Expression::new().with_string(":id", "1").unwrap();
/// let input = query::build_input("users", "id = :id", expression, Default::default()).unwrap();
/// assert_eq!(input.scan_index_forward(), Some(true));
/// assert!(query::build_input("users", " ", Expression::new(), Default::default()).is_err());
/// ```
pub fn build_input(
    table: &str,
    key_condition_expression: &str,
    expression: Expression,
    options: QueryOptions,
) -> Result<operation::query::QueryInput> {
    validation::validate_table_name(table, "table")?;
    validation::require_text(key_condition_expression, "key_condition_expression")?;
    if let Some(index_name) = &options.index_name {
        validation::validate_index_name(index_name, "index_name")?;
    }
    let read_input = item_common::ReadInput::from(options.response_options);
    let builder = operation::query::QueryInput::builder()
        .table_name(table)
        .key_condition_expression(key_condition_expression)
        .set_expression_attribute_values(common::non_empty(expression.into()))
        .set_exclusive_start_key(
            options
                .exclusive_start_key
                .as_ref()
                .map(PrimaryKey::to_attribute_values),
        )
        .set_filter_expression(common::non_blank(options.filter_expression))
        .set_index_name(options.index_name)
        .set_limit(options.limit.map(|limit| limit.max(MINIMUM_LIMIT)))
        .scan_index_forward(options.scan_index_forward)
        .select(options.select_attributes.into());
    let input = item_common::apply_read_input!(builder, read_input).build()?;
    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    use aws_sdk_dynamodb::types;
    use rstest::rstest;

    fn expression() -> Expression {
        Expression::new().with_string(":id", "1").unwrap()
    }

    #[rstest]
    #[case::defaults(
        QueryOptions::default(),
        operation::query::QueryInput::builder()
            .table_name("users")
            .key_condition_expression("id = :id")
            .expression_attribute_values(":id", types::AttributeValue::S("1".to_string()))
            .scan_index_forward(true)
            .select(types::Select::AllAttributes)
            .consistent_read(false)
            .return_consumed_capacity(types::ReturnConsumedCapacity::None)
            .build()
            .unwrap()
    )]
    #[case::full(
        QueryOptions {
            limit: Some(25),
            exclusive_start_key: Some(
                PrimaryKey::new("id", types::AttributeValue::S("1".to_string())).unwrap()
            ),
            scan_index_forward: false,
            index_name: Some(
                "by_email".to_string()
            ),
            filter_expression: Some(
                "attribute_exists(email)".to_string()
            ),
            select_attributes: SelectAttributes::AllProjected,
            ..Default::default()
        },
        operation::query::QueryInput::builder()
            .table_name("users")
            .key_condition_expression("id = :id")
            .expression_attribute_values(":id", types::AttributeValue::S("1".to_string()))
            .exclusive_start_key("id", types::AttributeValue::S("1".to_string()))
            .filter_expression("attribute_exists(email)")
            .index_name("by_email")
            .limit(25)
            .scan_index_forward(false)
            .select(types::Select::AllProjectedAttributes)
            .consistent_read(false)
            .return_consumed_capacity(types::ReturnConsumedCapacity::None)
            .build()
            .unwrap()
    )]
    #[case::limit_raised(
        QueryOptions {
            limit: Some(-3),
            ..Default::default()
        },
        operation::query::QueryInput::builder()
            .table_name("users")
            .key_condition_expression("id = :id")
            .expression_attribute_values(":id", types::AttributeValue::S("1".to_string()))
            .limit(1)
            .scan_index_forward(true)
            .select(types::Select::AllAttributes)
            .consistent_read(false)
            .return_consumed_capacity(types::ReturnConsumedCapacity::None)
            .build()
            .unwrap()
    )]
    fn test_build_input(
        #[case] options: QueryOptions,
        #[case] expected: operation::query::QueryInput,
    ) {
        let actual = build_input("users", "id = :id", expression(), options).unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::white_space("   ")]
    fn test_missing_key_condition(#[case] key_condition_expression: &str) {
        let actual = build_input("users", key_condition_expression, expression(), Default::default());
        assert!(matches!(actual, Err(Error::MissingArgument { .. })));
    }

    #[test]
    fn test_invalid_index_name() {
        let options = QueryOptions {
            index_name: Some("ix".to_string()),
            ..Default::default()
        };
        let actual = build_input("users", "id = :id", expression(), options);
        assert!(matches!(actual, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_empty_expression_omitted() {
        let actual = build_input("users", "id = :id", Expression::new(), Default::default()).unwrap();
        assert_eq!(actual.expression_attribute_values(), None);
    }
}
