//! Construction and extraction of wire attribute values.
//!
//! Every constructor populates exactly one member of [`types::AttributeValue`].
//! Numbers are written as locale-independent decimal text, so `1234.5` is always
//! sent as `"1234.5"`.

use crate::error::{Error, Result};

use aws_sdk_dynamodb::{primitives::Blob, types};
use std::{collections, hash, io};

mod private {
    pub trait Sealed {}
}

/// Native numeric types that can be stored in a number attribute.
///
/// Every integer is representable. Floats are only representable when finite:
/// the service rejects `NaN` and the infinities, so use [`try_number`] when a
/// float may not be finite.
pub trait Number: Copy + Default + private::Sealed {
    /// Format the number as decimal text.
    fn to_number_text(self) -> String;

    /// Parse decimal text, returning `None` when it does not fit this type.
    fn parse_number_text(text: &str) -> Option<Self>;

    /// Whether the service can store this value.
    fn is_finite(self) -> bool;
}

macro_rules! impl_number {
    ($($number:ty),* => |$value:ident| $finite:expr) => {
        $(
            impl private::Sealed for $number {}

            impl Number for $number {
                fn to_number_text(self) -> String {
                    self.to_string()
                }

                fn parse_number_text(text: &str) -> Option<Self> {
                    text.trim().parse().ok()
                }

                fn is_finite(self) -> bool {
                    let $value = self;
                    $finite
                }
            }
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize => |_value| true);
impl_number!(f32, f64 => |value| value.is_finite());

fn finite_number_text<N: Number>(value: N) -> Result<String> {
    if value.is_finite() {
        Ok(value.to_number_text())
    } else {
        Err(Error::invalid_argument(
            "value",
            format!("`{}` is not a finite number", value.to_number_text()),
        ))
    }
}

/// String value.
pub fn string(value: impl Into<String>) -> types::AttributeValue {
    types::AttributeValue::S(value.into())
}

/// String set value.
pub fn string_set<I, S>(values: I) -> types::AttributeValue
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    types::AttributeValue::Ss(values.into_iter().map(Into::into).collect())
}

/// Number value.
///
/// Non-finite floats are written as their text and rejected by the service;
/// see [`try_number`].
///
/// ```rust
/// use aws_sdk_dynamodb::types::AttributeValue;
/// use dynamodb_manager::common::attribute_value;
///
/// assert_eq!(attribute_value::number(1234.5), AttributeValue::N("1234.5".to_string()));
/// ```
pub fn number<N: Number>(value: N) -> types::AttributeValue {
    types::AttributeValue::N(value.to_number_text())
}

/// Number value, rejecting `NaN` and the infinities.
///
/// ```rust
/// use dynamodb_manager::common::attribute_value;
///
/// assert!(attribute_value::try_number(0.5f32).is_ok());
/// assert!(attribute_value::try_number(f64::NAN).is_err());
/// ```
pub fn try_number<N: Number>(value: N) -> Result<types::AttributeValue> {
    Ok(types::AttributeValue::N(finite_number_text(value)?))
}

/// Number set value, rejecting `NaN` and the infinities.
pub fn try_number_set<I, N>(values: I) -> Result<types::AttributeValue>
where
    I: IntoIterator<Item = N>,
    N: Number,
{
    let values = values
        .into_iter()
        .map(finite_number_text)
        .collect::<Result<Vec<_>>>()?;
    Ok(types::AttributeValue::Ns(values))
}

/// Number set value.
pub fn number_set<I, N>(values: I) -> types::AttributeValue
where
    I: IntoIterator<Item = N>,
    N: Number,
{
    types::AttributeValue::Ns(values.into_iter().map(Number::to_number_text).collect())
}

fn read_fully<R: io::Read>(source: Option<R>) -> Result<Blob> {
    let mut buffer = Vec::new();
    if let Some(mut source) = source {
        source.read_to_end(&mut buffer)?;
    }
    Ok(Blob::new(buffer))
}

/// Binary value, read fully from `source`.
///
/// A missing source yields an empty binary value.
pub fn binary<R: io::Read>(source: Option<R>) -> Result<types::AttributeValue> {
    read_fully(source).map(types::AttributeValue::B)
}

/// Binary value from bytes already in memory.
pub fn bytes(value: impl Into<Vec<u8>>) -> types::AttributeValue {
    types::AttributeValue::B(Blob::new(value))
}

/// Binary set value, each member read fully from its source.
pub fn binary_set<I, R>(sources: I) -> Result<types::AttributeValue>
where
    I: IntoIterator<Item = Option<R>>,
    R: io::Read,
{
    let blobs = sources
        .into_iter()
        .map(read_fully)
        .collect::<Result<Vec<_>>>()?;
    Ok(types::AttributeValue::Bs(blobs))
}

/// Boolean value.
pub fn boolean(value: bool) -> types::AttributeValue {
    types::AttributeValue::Bool(value)
}

/// Null value.
pub fn null() -> types::AttributeValue {
    types::AttributeValue::Null(true)
}

/// Map value.
pub fn map(value: collections::HashMap<String, types::AttributeValue>) -> types::AttributeValue {
    types::AttributeValue::M(value)
}

/// Typed reads from an attribute map.
///
/// A missing key never fails: it reads as `None`, an empty collection or zero.
pub trait AttributeMapExt {
    /// The string stored under `key`.
    fn get_string(&self, key: &str) -> Option<&str>;

    /// The string set stored under `key`, empty when missing.
    fn get_string_set(&self, key: &str) -> &[String];

    /// The number stored under `key`, zero when missing.
    ///
    /// Fails only when the stored text is not a valid `N`.
    fn get_number<N: Number>(&self, key: &str) -> Result<N>;

    /// The number set stored under `key`, empty when missing.
    fn get_number_set<N: Number>(&self, key: &str) -> Result<Vec<N>>;

    /// The bytes stored under `key`.
    fn get_binary(&self, key: &str) -> Option<&[u8]>;

    /// The binary set stored under `key`, empty when missing.
    fn get_binary_set(&self, key: &str) -> Vec<&[u8]>;

    /// The boolean stored under `key`.
    fn get_boolean(&self, key: &str) -> Option<bool>;

    /// The map stored under `key`.
    fn get_map(&self, key: &str) -> Option<&collections::HashMap<String, types::AttributeValue>>;
}

fn parse_number<N: Number>(key: &str, text: &str) -> Result<N> {
    N::parse_number_text(text).ok_or_else(|| Error::InvalidNumber {
        key: key.to_string(),
        value: text.to_string(),
    })
}

impl<S: hash::BuildHasher> AttributeMapExt for collections::HashMap<String, types::AttributeValue, S> {
    fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(|value| value.as_s().ok())
            .map(String::as_str)
    }

    fn get_string_set(&self, key: &str) -> &[String] {
        self.get(key)
            .and_then(|value| value.as_ss().ok())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    fn get_number<N: Number>(&self, key: &str) -> Result<N> {
        match self.get(key).and_then(|value| value.as_n().ok()) {
            Some(text) => parse_number(key, text),
            None => Ok(N::default()),
        }
    }

    fn get_number_set<N: Number>(&self, key: &str) -> Result<Vec<N>> {
        match self.get(key).and_then(|value| value.as_ns().ok()) {
            Some(texts) => texts.iter().map(|text| parse_number(key, text)).collect(),
            None => Ok(Vec::new()),
        }
    }

    fn get_binary(&self, key: &str) -> Option<&[u8]> {
        self.get(key)
            .and_then(|value| value.as_b().ok())
            .map(Blob::as_ref)
    }

    fn get_binary_set(&self, key: &str) -> Vec<&[u8]> {
        self.get(key)
            .and_then(|value| value.as_bs().ok())
            .map(|blobs| blobs.iter().map(Blob::as_ref).collect())
            .unwrap_or_default()
    }

    fn get_boolean(&self, key: &str) -> Option<bool> {
        self.get(key)
            .and_then(|value| value.as_bool().ok())
            .copied()
    }

    fn get_map(&self, key: &str) -> Option<&collections::HashMap<String, types::AttributeValue>> {
        self.get(key).and_then(|value| value.as_m().ok())
    }
}
