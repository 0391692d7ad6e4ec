use crate::common::validation;
use crate::error::{Error, Result};

use std::{borrow, fmt, ops, str};

/// Marker that every expression attribute name starts with.
pub const ATTRIBUTE_NAME_MARKER: char = ':';

/// Name of a substitution value referenced from an expression, such as `:id`.
///
/// The name is at least two characters long, starts with [`ATTRIBUTE_NAME_MARKER`]
/// and continues with alphanumeric characters only.
///
/// ```rust
/// use dynamodb_manager::common::attribute_name::AttributeName;
///
/// let name = AttributeName::new(":status").unwrap();
/// assert_eq!(name.as_str(), ":status");
/// assert!(AttributeName::new("status").is_err());
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct AttributeName(String);

impl AttributeName {
    /// Validate and wrap an attribute name.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.chars().count() < 2 {
            return Err(Error::invalid_argument(
                "name",
                "value must have a length of at least two characters, where the first character must be a colon (:)",
            ));
        }
        let Some(rest) = name.strip_prefix(ATTRIBUTE_NAME_MARKER) else {
            return Err(Error::invalid_argument(
                "name",
                "value must begin with a colon (:)",
            ));
        };
        validation::validate_alphanumeric(rest, "name")?;
        Ok(Self(name))
    }

    /// The validated name, marker included.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl ops::Deref for AttributeName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for AttributeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl borrow::Borrow<str> for AttributeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl str::FromStr for AttributeName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl TryFrom<&str> for AttributeName {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self> {
        Self::new(name)
    }
}

impl TryFrom<String> for AttributeName {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        Self::new(name)
    }
}

impl From<AttributeName> for String {
    fn from(name: AttributeName) -> Self {
        name.0
    }
}
