//! Error types for request validation and construction.

use aws_sdk_dynamodb::error;
use std::fmt;
use thiserror::Error;

/// Errors raised while validating input or composing a request.
///
/// Failures reported by the database service itself are never wrapped in this
/// type: manager operations hand back the SDK's `SdkError` untouched.
#[derive(Debug, Error)]
pub enum Error {
    /// An argument violated a length, character set, uniqueness or cardinality rule.
    #[error("invalid argument `{param}`: {message}")]
    InvalidArgument {
        /// Name of the offending parameter.
        param: String,
        /// Description of the violated rule.
        message: String,
    },

    /// A required argument was empty.
    #[error("missing argument `{param}`")]
    MissingArgument {
        /// Name of the missing parameter.
        param: String,
    },

    /// A stored number could not be read as the requested numeric type.
    #[error("attribute `{key}` holds `{value}`, which is not a valid value of the requested numeric type")]
    InvalidNumber {
        /// The attribute that was read.
        key: String,
        /// The stored numeric text.
        value: String,
    },

    /// The caller cancelled the operation.
    #[error("operation cancelled")]
    Cancelled,

    /// A wire structure could not be built.
    #[error(transparent)]
    Build(#[from] error::BuildError),

    /// A value could not be converted to or from an attribute map.
    #[error(transparent)]
    Serialization(#[from] serde_dynamo::Error),

    /// A binary source could not be read.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn invalid_argument(param: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.into(),
            message: message.into(),
        }
    }

    pub(crate) fn missing_argument(param: impl Into<String>) -> Self {
        Self::MissingArgument {
            param: param.into(),
        }
    }

    /// Find the validation or cancellation error carried by an `SdkError`.
    ///
    /// Manager operations report rejected input as a construction failure;
    /// this walks the source chain and returns the crate error, if any.
    ///
    /// ```rust
    /// use aws_sdk_dynamodb::{error, operation};
    /// use dynamodb_manager::Error;
    ///
    /// let sdk_error: error::SdkError<operation::delete_table::DeleteTableError> =
    ///     error::BuildError::other(Error::Cancelled).into();
    /// assert!(matches!(Error::find(&sdk_error), Some(Error::Cancelled)));
    /// ```
    pub fn find<E, R>(sdk_error: &error::SdkError<E, R>) -> Option<&Self>
    where
        E: std::error::Error + 'static,
        R: fmt::Debug,
    {
        let mut source = std::error::Error::source(sdk_error);
        while let Some(current) = source {
            if let Some(error) = current.downcast_ref::<Self>() {
                return Some(error);
            }
            source = current.source();
        }
        None
    }
}

/// Result type for validation and request construction.
pub type Result<T, E = Error> = std::result::Result<T, E>;
