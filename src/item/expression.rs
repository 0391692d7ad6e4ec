use crate::common::attribute_name::AttributeName;
use crate::common::attribute_value::{self, Number};
use crate::error::Result;

use aws_sdk_dynamodb::types;
use std::{collections, io};

/// Substitution values referenced from condition, filter, key condition and
/// update expressions.
///
/// ```rust
/// use dynamodb_manager::item::expression::Expression;
///
/// let expression = Expression::new()
///     .with_string(":status", "active")
///     .unwrap()
///     .with_number(":minimum", 18u8)
///     .unwrap();
/// assert_eq!(expression.len(), 2);
/// assert!(Expression::new().with_string("status", "active").is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Expression(collections::HashMap<AttributeName, types::AttributeValue>);

impl Expression {
    /// Expression without values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, returning the previous value.
    pub fn insert(
        &mut self,
        name: AttributeName,
        value: types::AttributeValue,
    ) -> Option<types::AttributeValue> {
        self.0.insert(name, value)
    }

    /// Validate `name` and bind it to `value`.
    pub fn with(mut self, name: &str, value: types::AttributeValue) -> Result<Self> {
        self.insert(AttributeName::new(name)?, value);
        Ok(self)
    }

    /// Bind a string value.
    pub fn with_string(self, name: &str, value: impl Into<String>) -> Result<Self> {
        self.with(name, attribute_value::string(value))
    }

    /// Bind a string set value.
    pub fn with_string_set<I, S>(self, name: &str, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(name, attribute_value::string_set(values))
    }

    /// Bind a number value.
    ///
    /// Fails for `NaN` and the infinities, as well as for an invalid name.
    pub fn with_number<N: Number>(self, name: &str, value: N) -> Result<Self> {
        self.with(name, attribute_value::try_number(value)?)
    }

    /// Bind a number set value.
    pub fn with_number_set<I, N>(self, name: &str, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = N>,
        N: Number,
    {
        self.with(name, attribute_value::try_number_set(values)?)
    }

    /// Bind a binary value, reading `source` fully.
    pub fn with_binary<R: io::Read>(self, name: &str, source: Option<R>) -> Result<Self> {
        let value = attribute_value::binary(source)?;
        self.with(name, value)
    }

    /// Bind a binary set value, reading every source fully.
    pub fn with_binary_set<I, R>(self, name: &str, sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = Option<R>>,
        R: io::Read,
    {
        let value = attribute_value::binary_set(sources)?;
        self.with(name, value)
    }

    /// Bind a boolean value.
    pub fn with_boolean(self, name: &str, value: bool) -> Result<Self> {
        self.with(name, attribute_value::boolean(value))
    }

    /// Bind a null value.
    pub fn with_null(self, name: &str) -> Result<Self> {
        self.with(name, attribute_value::null())
    }

    /// Bind a map value.
    pub fn with_map(
        self,
        name: &str,
        value: collections::HashMap<String, types::AttributeValue>,
    ) -> Result<Self> {
        self.with(name, attribute_value::map(value))
    }

    /// Number of bound values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no values are bound.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&types::AttributeValue> {
        self.0.get(name)
    }

    /// Wire form of the values, keyed by the plain names.
    pub fn to_attribute_values(&self) -> collections::HashMap<String, types::AttributeValue> {
        self.0
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }
}

impl From<Expression> for collections::HashMap<String, types::AttributeValue> {
    fn from(expression: Expression) -> Self {
        expression
            .0
            .into_iter()
            .map(|(name, value)| (name.into_string(), value))
            .collect()
    }
}
