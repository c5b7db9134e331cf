mod float;
mod tag;
mod wire;

#[cfg(test)]
mod tests;

use crate::error::FilterError;
use serde_json::Value as JsonValue;

// re-exports
pub use float::Float64;
pub use tag::ValueTag;

///
/// Value
/// can be used as a filter target or as a row's field value
///
/// Null    → the field holds no value (JSON `null`, Rust `None`).
/// Int     → every integer that fits in i64, including non-negative ones.
/// Uint    → only integers above `i64::MAX`.
/// List    → ordered sequence; the target shape of `in` predicates.
///
/// Objects have no representation here: a filter target or a row cell is a
/// scalar or a sequence of scalars.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Bool(bool),
    Float64(Float64),
    Int(i64),
    List(Vec<Self>),
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    /// Canonical integer constructor for unsigned input.
    #[must_use]
    pub fn from_u64(n: u64) -> Self {
        i64::try_from(n).map_or(Self::Uint(n), Self::Int)
    }

    /// Build a list value from anything convertible into values.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Stable variant tag for hashing and diagnostics.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        match self {
            Self::Bool(_) => ValueTag::Bool,
            Self::Float64(_) => ValueTag::Float64,
            Self::Int(_) => ValueTag::Int,
            Self::List(_) => ValueTag::List,
            Self::Null => ValueTag::Null,
            Self::Text(_) => ValueTag::Text,
            Self::Uint(_) => ValueTag::Uint,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Borrow list items when this value is a sequence.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Convert one borrowed JSON value, rejecting objects and lossy numbers.
    pub fn try_from_json(json: &JsonValue) -> Result<Self, FilterError> {
        match json {
            JsonValue::Null => Ok(Self::Null),
            JsonValue::Bool(v) => Ok(Self::Bool(*v)),
            JsonValue::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(Self::Int(v))
                } else if let Some(v) = n.as_u64() {
                    Ok(Self::from_u64(v))
                } else {
                    n.as_f64()
                        .and_then(Float64::try_new)
                        .map(Self::Float64)
                        .ok_or_else(|| FilterError::unsupported_value(format!("number {n}")))
                }
            }
            JsonValue::String(v) => Ok(Self::Text(v.clone())),
            JsonValue::Array(items) => items
                .iter()
                .map(Self::try_from_json)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            JsonValue::Object(_) => Err(FilterError::unsupported_value(
                "objects are not filter values",
            )),
        }
    }
}

impl TryFrom<&JsonValue> for Value {
    type Error = FilterError;

    fn try_from(json: &JsonValue) -> Result<Self, Self::Error> {
        Self::try_from_json(json)
    }
}

impl From<&Value> for JsonValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Bool(v) => Self::Bool(*v),
            Value::Float64(v) => {
                serde_json::Number::from_f64(v.get()).map_or(Self::Null, Self::Number)
            }
            Value::Int(v) => Self::from(*v),
            Value::List(items) => Self::Array(items.iter().map(Self::from).collect()),
            Value::Null => Self::Null,
            Value::Text(v) => Self::String(v.clone()),
            Value::Uint(v) => Self::from(*v),
        }
    }
}

///
/// CONVERSIONS
///

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<Float64> for Value {
    fn from(v: Float64) -> Self {
        Self::Float64(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::from_u64(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}

impl TryFrom<f64> for Value {
    type Error = FilterError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Float64::try_new(v)
            .map(Self::Float64)
            .ok_or_else(|| FilterError::unsupported_value(format!("non-finite float {v}")))
    }
}
