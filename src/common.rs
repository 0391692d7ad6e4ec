//! Common building blocks shared by table and item operations.
//!
//! This module provides the name validators, the expression attribute name type,
//! attribute value construction and extraction, and the response-shaping options
//! that several operations accept.

/// Expression attribute names such as `:id`.
pub mod attribute_name;

/// Attribute value construction and typed extraction.
pub mod attribute_value;

/// Length and character-set rules for names.
pub mod validation;

use aws_sdk_dynamodb::types;
use std::collections;

/// Which consumed-capacity figures the service should report.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ResponseCapacity {
    /// Report nothing.
    #[default]
    None,
    /// Report the total and the figure for each index touched.
    Indexes,
    /// Report the total only.
    Total,
}

impl From<ResponseCapacity> for types::ReturnConsumedCapacity {
    fn from(capacity: ResponseCapacity) -> Self {
        match capacity {
            ResponseCapacity::None => Self::None,
            ResponseCapacity::Indexes => Self::Indexes,
            ResponseCapacity::Total => Self::Total,
        }
    }
}

/// The kind of item operation a request performs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ItemOperation {
    /// PutItem.
    Create,
    /// GetItem, Query and Scan.
    Read,
    /// UpdateItem.
    Update,
    /// DeleteItem.
    Delete,
}

/// Which item attributes a write should hand back.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ResponseAttributes {
    /// Return nothing.
    #[default]
    None,
    /// The whole item as it was before the write.
    AllOld,
    /// The whole item as it is after the write.
    AllNew,
    /// The updated attributes as they were before the write.
    UpdatedOld,
    /// The updated attributes as they are after the write.
    UpdatedNew,
}

impl ResponseAttributes {
    /// The return value to request for `operation`.
    ///
    /// Puts and deletes can only return the old item, so any choice other than
    /// [`ResponseAttributes::AllOld`] becomes `NONE` for them. Updates pass every
    /// choice through and reads never return values.
    ///
    /// ```rust
    /// use aws_sdk_dynamodb::types::ReturnValue;
    /// use dynamodb_manager::common::{ItemOperation, ResponseAttributes};
    ///
    /// assert_eq!(ResponseAttributes::AllNew.to_return_value(ItemOperation::Delete), ReturnValue::None);
    /// assert_eq!(ResponseAttributes::AllNew.to_return_value(ItemOperation::Update), ReturnValue::AllNew);
    /// ```
    pub fn to_return_value(self, operation: ItemOperation) -> types::ReturnValue {
        match (operation, self) {
            (ItemOperation::Create | ItemOperation::Delete, Self::AllOld) => {
                types::ReturnValue::AllOld
            }
            (ItemOperation::Update, Self::AllOld) => types::ReturnValue::AllOld,
            (ItemOperation::Update, Self::AllNew) => types::ReturnValue::AllNew,
            (ItemOperation::Update, Self::UpdatedOld) => types::ReturnValue::UpdatedOld,
            (ItemOperation::Update, Self::UpdatedNew) => types::ReturnValue::UpdatedNew,
            _ => types::ReturnValue::None,
        }
    }
}

/// Whether item collection metrics should be reported.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ResponseMetrics {
    /// Report nothing.
    #[default]
    None,
    /// Report the size of the affected item collections.
    Size,
}

impl From<ResponseMetrics> for types::ReturnItemCollectionMetrics {
    fn from(metrics: ResponseMetrics) -> Self {
        match metrics {
            ResponseMetrics::None => Self::None,
            ResponseMetrics::Size => Self::Size,
        }
    }
}

/// Which attributes a query or scan returns.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SelectAttributes {
    /// Every attribute of the item.
    #[default]
    All,
    /// Every attribute projected into the index.
    AllProjected,
    /// Only the number of matching items.
    Count,
    /// The attributes named by the projection expression.
    Specific,
}

impl From<SelectAttributes> for types::Select {
    fn from(select: SelectAttributes) -> Self {
        match select {
            SelectAttributes::All => Self::AllAttributes,
            SelectAttributes::AllProjected => Self::AllProjectedAttributes,
            SelectAttributes::Count => Self::Count,
            SelectAttributes::Specific => Self::SpecificAttributes,
        }
    }
}

/// `None` for an empty map, so that empty maps are left out of requests.
pub(crate) fn non_empty<K, V>(map: collections::HashMap<K, V>) -> Option<collections::HashMap<K, V>> {
    if map.is_empty() { None } else { Some(map) }
}

/// `None` for blank text.
pub(crate) fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|text| !text.trim().is_empty())
}
