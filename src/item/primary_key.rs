use crate::common::validation;
use crate::error::{Error, Result};

use aws_sdk_dynamodb::types;
use indexmap::IndexMap;
use serde::Serialize;
use serde_dynamo::to_item;
use std::collections;

/// The key addressing one item: a partition key value and an optional sort key value.
///
/// ```rust
/// use dynamodb_manager::common::attribute_value;
/// use dynamodb_manager::item::primary_key::PrimaryKey;
///
/// let key = PrimaryKey::new("id", attribute_value::string("1"))
///     .unwrap()
///     .with_sort_key("created", attribute_value::number(1_700_000_000i64))
///     .unwrap();
/// assert!(key.is_composite());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PrimaryKey(IndexMap<String, types::AttributeValue>);

impl PrimaryKey {
    /// Largest number of key attributes.
    pub const MAXIMUM_KEYS: usize = 2;

    /// Key with a partition key value only.
    pub fn new(
        partition_key_name: impl Into<String>,
        partition_key_value: types::AttributeValue,
    ) -> Result<Self> {
        let partition_key_name = partition_key_name.into();
        validation::validate_key_name(&partition_key_name, "partition_key_name")?;
        Ok(Self(IndexMap::from([(
            partition_key_name,
            partition_key_value,
        )])))
    }

    /// Add the sort key value.
    ///
    /// Fails when the key already has a sort key or when the name repeats the
    /// partition key name.
    pub fn with_sort_key(
        mut self,
        sort_key_name: impl Into<String>,
        sort_key_value: types::AttributeValue,
    ) -> Result<Self> {
        let sort_key_name = sort_key_name.into();
        validation::validate_key_name(&sort_key_name, "sort_key_name")?;
        if self.is_composite() {
            return Err(Error::invalid_argument(
                "sort_key_name",
                "the key already has a sort key",
            ));
        }
        if self.0.contains_key(&sort_key_name) {
            return Err(Error::invalid_argument(
                "sort_key_name",
                "the sort key cannot share the name of the partition key",
            ));
        }
        self.0.insert(sort_key_name, sort_key_value);
        Ok(self)
    }

    /// Key from any value serializing to a map of one or two attributes.
    ///
    /// ```rust
    /// use dynamodb_manager::item::primary_key::PrimaryKey;
    /// use serde_json::json;
    ///
    /// let key = PrimaryKey::from_serializable(json!({"id": "1"})).unwrap();
    /// assert!(!key.is_composite());
    /// ```
    pub fn from_serializable<T: Serialize>(value: T) -> Result<Self> {
        let attributes: collections::HashMap<String, types::AttributeValue> = to_item(value)?;
        attributes.try_into()
    }

    /// Whether both a partition and a sort key value are present.
    pub fn is_composite(&self) -> bool {
        self.0.len() == Self::MAXIMUM_KEYS
    }

    /// The value stored for `name`.
    pub fn get(&self, name: &str) -> Option<&types::AttributeValue> {
        self.0.get(name)
    }

    /// Key attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &types::AttributeValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Wire form of the key.
    pub fn to_attribute_values(&self) -> collections::HashMap<String, types::AttributeValue> {
        self.0
            .iter()
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }
}

impl TryFrom<collections::HashMap<String, types::AttributeValue>> for PrimaryKey {
    type Error = Error;

    fn try_from(attributes: collections::HashMap<String, types::AttributeValue>) -> Result<Self> {
        if attributes.is_empty() || attributes.len() > Self::MAXIMUM_KEYS {
            let message = format!(
                "a primary key holds one or two attributes, not {}",
                attributes.len()
            );
            return Err(Error::invalid_argument("attributes", message));
        }
        for name in attributes.keys() {
            validation::validate_key_name(name, "attributes")?;
        }
        Ok(Self(attributes.into_iter().collect()))
    }
}

impl From<PrimaryKey> for collections::HashMap<String, types::AttributeValue> {
    fn from(key: PrimaryKey) -> Self {
        key.0.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::one_entry(json!({"a": "b"}), false)]
    #[case::two_entries(json!({"a": "b", "c": 1}), true)]
    fn test_from_serializable(#[case] value: Value, #[case] expected: bool) {
        let actual = PrimaryKey::from_serializable(value).unwrap();
        assert_eq!(actual.is_composite(), expected);
    }

    #[rstest]
    #[case::zero_entries(json!({}))]
    #[case::three_entries(json!({"a": "b", "c": "d", "e": "f"}))]
    #[case::empty_name(json!({"": "b"}))]
    fn test_invalid_from_serializable(#[case] value: Value) {
        let actual = PrimaryKey::from_serializable(value);
        assert!(matches!(actual, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_not_a_map() {
        let actual = PrimaryKey::from_serializable("a");
        assert!(matches!(actual, Err(Error::Serialization(_))));
    }

    #[test]
    fn test_explicit_pairs() {
        let key = PrimaryKey::new("a", types::AttributeValue::S("b".to_string())).unwrap();
        assert!(!key.is_composite());
        let key = key
            .with_sort_key("c", types::AttributeValue::N("100".to_string()))
            .unwrap();
        assert!(key.is_composite());
        assert_eq!(
            key.to_attribute_values(),
            collections::HashMap::from([
                ("a".to_string(), types::AttributeValue::S("b".to_string())),
                ("c".to_string(), types::AttributeValue::N("100".to_string())),
            ])
        );
        assert_eq!(
            key.iter().map(|(name, _)| name).collect::<Vec<_>>(),
            vec!["a", "c"]
        );
    }

    #[test]
    fn test_third_key_rejected() {
        let key = PrimaryKey::new("a", types::AttributeValue::S("b".to_string()))
            .unwrap()
            .with_sort_key("c", types::AttributeValue::S("d".to_string()))
            .unwrap();
        let actual = key.with_sort_key("e", types::AttributeValue::S("f".to_string()));
        assert!(actual.is_err());
    }

    #[test]
    fn test_sort_key_sharing_partition_name_rejected() {
        let actual = PrimaryKey::new("a", types::AttributeValue::S("b".to_string()))
            .unwrap()
            .with_sort_key("a", types::AttributeValue::S("c".to_string()));
        assert!(actual.is_err());
    }

    #[test]
    fn test_invalid_partition_key_name() {
        let actual = PrimaryKey::new(" ", types::AttributeValue::S("b".to_string()));
        assert!(actual.is_err());
    }
}
