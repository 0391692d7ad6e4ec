use crate::common::{self, ItemOperation, ResponseAttributes, ResponseCapacity, ResponseMetrics};
use crate::item::expression::Expression;

use aws_sdk_dynamodb::types;
use std::collections;

/// Options shared by the item writes (PutItem, DeleteItem and UpdateItem).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ItemOptions {
    /// Which item attributes to return in the response.
    ///
    /// Updates honor every variant. Puts and deletes only honor
    /// [`ResponseAttributes::AllOld`]; anything else is sent as `NONE`.
    pub response_attributes: ResponseAttributes,
    /// Whether to return item collection metrics.
    ///
    /// Item collection metrics describe the collections (local secondary
    /// indexes) affected by the write.
    pub response_metrics: ResponseMetrics,
    /// Whether to return the consumed capacity.
    pub response_capacity: ResponseCapacity,
    /// Condition expression that must be true for the write to succeed.
    ///
    /// If the condition is false the service fails the request with a
    /// conditional check error. A blank expression is not sent.
    pub condition_expression: Option<String>,
    /// Expression attribute names, `#name` to attribute name.
    ///
    /// Needed for attribute names that clash with reserved words. Not sent
    /// when empty.
    pub expression_mapping: collections::HashMap<String, String>,
    /// Values referenced from the condition and update expressions.
    pub expression: Expression,
}

/// Options for UpdateItem.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateItemOptions {
    /// The options shared with the other writes.
    pub item_options: ItemOptions,
    /// The update expression, such as `SET #name = :name REMOVE tags`.
    ///
    /// Values it references go in the [`ItemOptions::expression`] of
    /// `item_options`.
    pub update_expression: Option<String>,
}

/// Options shared by the reads (GetItem, Query and Scan).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseOptions {
    /// Whether to use a strongly consistent read.
    ///
    /// Eventually consistent reads are used by default. Global secondary
    /// indexes only support eventually consistent reads.
    pub consistent_read: bool,
    /// Attributes to return, such as `id, #name`.
    pub projection_expression: Option<String>,
    /// Whether to return the consumed capacity.
    pub response_capacity: ResponseCapacity,
    /// Expression attribute names, `#name` to attribute name.
    pub expression_mapping: collections::HashMap<String, String>,
}

/// Internal representation of the write options.
///
/// Holds the wire values after the response rules for the operation have been
/// applied and empty maps and blank expressions have been dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ItemInput {
    pub(crate) condition_expression: Option<String>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) expression_attribute_values:
        Option<collections::HashMap<String, types::AttributeValue>>,
    pub(crate) return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
    pub(crate) return_item_collection_metrics: Option<types::ReturnItemCollectionMetrics>,
    pub(crate) return_values: Option<types::ReturnValue>,
}

impl ItemInput {
    pub(crate) fn new(options: ItemOptions, operation: ItemOperation) -> Self {
        Self {
            condition_expression: common::non_blank(options.condition_expression),
            expression_attribute_names: common::non_empty(options.expression_mapping),
            expression_attribute_values: common::non_empty(options.expression.into()),
            return_consumed_capacity: Some(options.response_capacity.into()),
            return_item_collection_metrics: Some(options.response_metrics.into()),
            return_values: Some(options.response_attributes.to_return_value(operation)),
        }
    }
}

/// Internal representation of the read options.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ReadInput {
    pub(crate) consistent_read: Option<bool>,
    pub(crate) expression_attribute_names: Option<collections::HashMap<String, String>>,
    pub(crate) projection_expression: Option<String>,
    pub(crate) return_consumed_capacity: Option<types::ReturnConsumedCapacity>,
}

impl From<ResponseOptions> for ReadInput {
    fn from(options: ResponseOptions) -> Self {
        Self {
            consistent_read: Some(options.consistent_read),
            expression_attribute_names: common::non_empty(options.expression_mapping),
            projection_expression: common::non_blank(options.projection_expression),
            return_consumed_capacity: Some(options.response_capacity.into()),
        }
    }
}

/// apply the write options to a write input builder
macro_rules! apply_item_input {
    ($builder:expr, $item_input:expr) => {
        $builder
            .set_condition_expression($item_input.condition_expression)
            .set_expression_attribute_names($item_input.expression_attribute_names)
            .set_expression_attribute_values($item_input.expression_attribute_values)
            .set_return_consumed_capacity($item_input.return_consumed_capacity)
            .set_return_item_collection_metrics($item_input.return_item_collection_metrics)
            .set_return_values($item_input.return_values)
    };
}

/// apply the read options to a read input builder
macro_rules! apply_read_input {
    ($builder:expr, $read_input:expr) => {
        $builder
            .set_consistent_read($read_input.consistent_read)
            .set_expression_attribute_names($read_input.expression_attribute_names)
            .set_projection_expression($read_input.projection_expression)
            .set_return_consumed_capacity($read_input.return_consumed_capacity)
    };
}

pub(crate) use {apply_item_input, apply_read_input};

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::defaults(
        ItemOptions::default(),
        ItemOperation::Create,
        ItemInput {
            return_consumed_capacity: Some(types::ReturnConsumedCapacity::None),
            return_item_collection_metrics: Some(types::ReturnItemCollectionMetrics::None),
            return_values: Some(types::ReturnValue::None),
            ..Default::default()
        }
    )]
    #[case::full(
        ItemOptions {
            response_attributes: ResponseAttributes::UpdatedNew,
            response_metrics: ResponseMetrics::Size,
            response_capacity: ResponseCapacity::Total,
            condition_expression: Some(
                "#a = :a".to_string()
            ),
            expression_mapping: collections::HashMap::from(
                [
                    ("#a".to_string(), "a".to_string()),
                ]
            ),
            expression: Expression::new()
                .with_string(":a", "b")
                .unwrap(),
        },
        ItemOperation::Update,
        ItemInput {
            condition_expression: Some(
                "#a = :a".to_string()
            ),
            expression_attribute_names: Some(
                collections::HashMap::from(
                    [
                        ("#a".to_string(), "a".to_string()),
                    ]
                )
            ),
            expression_attribute_values: Some(
                collections::HashMap::from(
                    [
                        (
                            ":a".to_string(),
                            types::AttributeValue::S(
                                "b".to_string()
                            )
                        ),
                    ]
                )
            ),
            return_consumed_capacity: Some(types::ReturnConsumedCapacity::Total),
            return_item_collection_metrics: Some(types::ReturnItemCollectionMetrics::Size),
            return_values: Some(types::ReturnValue::UpdatedNew),
        }
    )]
    #[case::blank_condition_dropped(
        ItemOptions {
            response_attributes: ResponseAttributes::AllNew,
            condition_expression: Some(
                " ".to_string()
            ),
            ..Default::default()
        },
        ItemOperation::Delete,
        ItemInput {
            return_consumed_capacity: Some(types::ReturnConsumedCapacity::None),
            return_item_collection_metrics: Some(types::ReturnItemCollectionMetrics::None),
            return_values: Some(types::ReturnValue::None),
            ..Default::default()
        }
    )]
    fn test_item_input(
        #[case] options: ItemOptions,
        #[case] operation: ItemOperation,
        #[case] expected: ItemInput,
    ) {
        assert_eq!(ItemInput::new(options, operation), expected);
    }

    #[rstest]
    #[case::defaults(
        ResponseOptions::default(),
        ReadInput {
            consistent_read: Some(false),
            return_consumed_capacity: Some(types::ReturnConsumedCapacity::None),
            ..Default::default()
        }
    )]
    #[case::full(
        ResponseOptions {
            consistent_read: true,
            projection_expression: Some(
                "#a, b".to_string()
            ),
            response_capacity: ResponseCapacity::Indexes,
            expression_mapping: collections::HashMap::from(
                [
                    ("#a".to_string(), "a".to_string()),
                ]
            ),
        },
        ReadInput {
            consistent_read: Some(true),
            expression_attribute_names: Some(
                collections::HashMap::from(
                    [
                        ("#a".to_string(), "a".to_string()),
                    ]
                )
            ),
            projection_expression: Some(
                "#a, b".to_string()
            ),
            return_consumed_capacity: Some(types::ReturnConsumedCapacity::Indexes),
        }
    )]
    fn test_read_input(#[case] options: ResponseOptions, #[case] expected: ReadInput) {
        assert_eq!(ReadInput::from(options), expected);
    }
}
