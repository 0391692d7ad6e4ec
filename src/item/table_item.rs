use crate::common::attribute_value::{self, Number};
use crate::error::Result;

use aws_sdk_dynamodb::types;
use serde::{Serialize, de::DeserializeOwned};
use serde_dynamo::{from_item, to_item};
use std::{collections, io, ops};

/// A full item: attribute names mapped to attribute values.
///
/// Typed reads come from [`attribute_value::AttributeMapExt`], which the item
/// derefs into.
///
/// ```rust
/// use dynamodb_manager::common::attribute_value::AttributeMapExt;
/// use dynamodb_manager::item::table_item::TableItem;
///
/// let item = TableItem::new()
///     .with_string("id", "1")
///     .with_number("visits", 3u32)
///     .with_boolean("active", true);
/// assert_eq!(item.get_number::<u32>("visits").unwrap(), 3);
/// assert_eq!(item.get_string("missing"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableItem(collections::HashMap<String, types::AttributeValue>);

impl TableItem {
    /// Item without attributes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Item from any value serializing to a map.
    pub fn from_serializable<T: Serialize>(value: T) -> Result<Self> {
        Ok(Self(to_item(value)?))
    }

    /// Deserialize the item into `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(from_item(self.0.clone())?)
    }

    /// Set `name` to `value`, returning the previous value.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: types::AttributeValue,
    ) -> Option<types::AttributeValue> {
        self.0.insert(name.into(), value)
    }

    /// Set `name` to `value`.
    pub fn with(mut self, name: impl Into<String>, value: types::AttributeValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a string attribute.
    pub fn with_string(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(name, attribute_value::string(value))
    }

    /// Set a string set attribute.
    pub fn with_string_set<I, S>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(name, attribute_value::string_set(values))
    }

    /// Set a number attribute.
    pub fn with_number<N: Number>(self, name: impl Into<String>, value: N) -> Self {
        self.with(name, attribute_value::number(value))
    }

    /// Set a number set attribute.
    pub fn with_number_set<I, N>(self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Number,
    {
        self.with(name, attribute_value::number_set(values))
    }

    /// Set a binary attribute, reading `source` fully.
    pub fn with_binary<R: io::Read>(self, name: impl Into<String>, source: Option<R>) -> Result<Self> {
        Ok(self.with(name, attribute_value::binary(source)?))
    }

    /// Set a binary attribute from bytes in memory.
    pub fn with_bytes(self, name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.with(name, attribute_value::bytes(value))
    }

    /// Set a binary set attribute, reading every source fully.
    pub fn with_binary_set<I, R>(self, name: impl Into<String>, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<R>>,
        R: io::Read,
    {
        Ok(self.with(name, attribute_value::binary_set(sources)?))
    }

    /// Set a boolean attribute.
    pub fn with_boolean(self, name: impl Into<String>, value: bool) -> Self {
        self.with(name, attribute_value::boolean(value))
    }

    /// Set a null attribute.
    pub fn with_null(self, name: impl Into<String>) -> Self {
        self.with(name, attribute_value::null())
    }

    /// Set a map attribute.
    pub fn with_map(self, name: impl Into<String>, value: TableItem) -> Self {
        self.with(name, attribute_value::map(value.0))
    }

    /// Wire form of the item.
    pub fn into_attributes(self) -> collections::HashMap<String, types::AttributeValue> {
        self.0
    }
}

impl ops::Deref for TableItem {
    type Target = collections::HashMap<String, types::AttributeValue>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<collections::HashMap<String, types::AttributeValue>> for TableItem {
    fn from(attributes: collections::HashMap<String, types::AttributeValue>) -> Self {
        Self(attributes)
    }
}

impl From<TableItem> for collections::HashMap<String, types::AttributeValue> {
    fn from(item: TableItem) -> Self {
        item.0
    }
}
