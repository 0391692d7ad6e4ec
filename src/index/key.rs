use crate::common::validation;
use crate::error::Result;

use aws_sdk_dynamodb::types;
use std::ops;

/// Scalar data type of a key attribute.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ScalarType {
    /// `S`.
    #[default]
    String,
    /// `N`.
    Number,
    /// `B`.
    Binary,
}

impl From<ScalarType> for types::ScalarAttributeType {
    fn from(scalar_type: ScalarType) -> Self {
        match scalar_type {
            ScalarType::String => Self::S,
            ScalarType::Number => Self::N,
            ScalarType::Binary => Self::B,
        }
    }
}

/// Role a key attribute plays in a key schema.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum KeyRole {
    /// The hash component.
    Partition,
    /// The range component.
    Sort,
}

impl From<KeyRole> for types::KeyType {
    fn from(role: KeyRole) -> Self {
        match role {
            KeyRole::Partition => Self::Hash,
            KeyRole::Sort => Self::Range,
        }
    }
}

/// A key attribute: validated name, scalar type and role.
///
/// Keys are only built through [`PartitionKey`] and [`SortKey`], so the role
/// always matches the wrapper it lives in.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Key {
    name: String,
    scalar_type: ScalarType,
    role: KeyRole,
}

impl Key {
    fn new(name: impl Into<String>, scalar_type: ScalarType, role: KeyRole) -> Result<Self> {
        let name = name.into();
        validation::validate_key_name(&name, "name")?;
        Ok(Self {
            name,
            scalar_type,
            role,
        })
    }

    /// Attribute name of the key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Scalar type of the key.
    pub fn scalar_type(&self) -> ScalarType {
        self.scalar_type
    }

    /// Role of the key.
    pub fn role(&self) -> KeyRole {
        self.role
    }

    /// Key schema element naming this key and its role.
    pub fn to_key_schema_element(&self) -> Result<types::KeySchemaElement> {
        let element = types::KeySchemaElement::builder()
            .attribute_name(&self.name)
            .key_type(self.role.into())
            .build()?;
        Ok(element)
    }

    /// Attribute definition naming this key and its scalar type.
    pub fn to_attribute_definition(&self) -> Result<types::AttributeDefinition> {
        let definition = types::AttributeDefinition::builder()
            .attribute_name(&self.name)
            .attribute_type(self.scalar_type.into())
            .build()?;
        Ok(definition)
    }
}

/// The partition (hash) key of a table or index.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct PartitionKey(Key);

impl PartitionKey {
    /// Validate the name and build a partition key.
    ///
    /// ```rust
    /// use dynamodb_manager::index::key::{KeyRole, PartitionKey, ScalarType};
    ///
    /// let key = PartitionKey::new("id", ScalarType::String).unwrap();
    /// assert_eq!(key.role(), KeyRole::Partition);
    /// assert!(PartitionKey::new("", ScalarType::String).is_err());
    /// ```
    pub fn new(name: impl Into<String>, scalar_type: ScalarType) -> Result<Self> {
        Key::new(name, scalar_type, KeyRole::Partition).map(Self)
    }
}

impl ops::Deref for PartitionKey {
    type Target = Key;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The sort (range) key of a table or index.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SortKey(Key);

impl SortKey {
    /// Validate the name and build a sort key.
    pub fn new(name: impl Into<String>, scalar_type: ScalarType) -> Result<Self> {
        Key::new(name, scalar_type, KeyRole::Sort).map(Self)
    }
}

impl ops::Deref for SortKey {
    type Target = Key;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
