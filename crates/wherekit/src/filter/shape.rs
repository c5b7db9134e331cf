//! Module: filter::shape
//! Responsibility: telling column-keyed and operator-keyed objects apart.
//! Does not own: evaluation or wire value decoding.
//! Boundary: untagged input is classified here once; everything downstream
//! works on the tagged `FilterShape`.

use crate::{
    error::FilterError,
    filter::{FilterOp, FiltersByColumn, OperatorRecord},
    obs::{FilterEvent, sink},
};
use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::collections::{BTreeMap, HashMap};

///
/// ObjectKeys
///
/// Read-only view over the key set of an opaque object.
///

pub trait ObjectKeys {
    fn object_keys(&self) -> impl Iterator<Item = &str>;

    fn is_empty_object(&self) -> bool {
        self.object_keys().next().is_none()
    }
}

impl<V> ObjectKeys for BTreeMap<String, V> {
    fn object_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

impl<V, S> ObjectKeys for HashMap<String, V, S> {
    fn object_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

impl ObjectKeys for JsonMap<String, JsonValue> {
    fn object_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

impl ObjectKeys for FiltersByColumn {
    fn object_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().map(String::as_str)
    }
}

impl ObjectKeys for OperatorRecord {
    fn object_keys(&self) -> impl Iterator<Item = &str> {
        self.keys().map(|op| op.as_str())
    }
}

///
/// ShapeKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ShapeKind {
    ByColumn,
    ByOperator,
}

/// True iff `obj` is empty or every key is an operator name.
#[must_use]
pub fn is_filters_by_operator_object<O: ObjectKeys + ?Sized>(obj: &O) -> bool {
    obj.is_empty_object()
        || obj
            .object_keys()
            .all(|key| FilterOp::from_name(key).is_some())
}

/// True iff `obj` is empty or is not an operator-keyed object.
///
/// A column literally named `eq` or `in` makes a single-column object look
/// operator-keyed. Callers that know the shape should build `FilterShape`
/// directly instead of classifying.
#[must_use]
pub fn is_filters_by_column_object<O: ObjectKeys + ?Sized>(obj: &O) -> bool {
    obj.is_empty_object() || !is_filters_by_operator_object(obj)
}

/// Classify a non-empty object; `None` for the empty object, which is valid
/// under both readings.
#[must_use]
pub fn classify<O: ObjectKeys + ?Sized>(obj: &O) -> Option<ShapeKind> {
    if obj.is_empty_object() {
        None
    } else if is_filters_by_operator_object(obj) {
        Some(ShapeKind::ByOperator)
    } else {
        Some(ShapeKind::ByColumn)
    }
}

///
/// FilterShape
///
/// Filter object with its representation fixed at construction time.
/// Serializes to the bare untagged wire form.
///

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterShape {
    ByColumn(FiltersByColumn),
    ByOperator(OperatorRecord),
}

impl FilterShape {
    #[must_use]
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::ByColumn(_) => ShapeKind::ByColumn,
            Self::ByOperator(_) => ShapeKind::ByOperator,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::ByColumn(filters) => filters.is_empty(),
            Self::ByOperator(record) => record.is_empty(),
        }
    }

    /// Decode an untagged JSON object through the key-set discriminator.
    ///
    /// The empty object decodes as an empty `ByColumn` filter.
    pub fn try_from_json_object(object: JsonMap<String, JsonValue>) -> Result<Self, FilterError> {
        let kind = classify(&object).unwrap_or(ShapeKind::ByColumn);
        let payload = JsonValue::Object(object);

        let shape = match kind {
            ShapeKind::ByColumn => Self::ByColumn(serde_json::from_value(payload)?),
            ShapeKind::ByOperator => Self::ByOperator(serde_json::from_value(payload)?),
        };
        sink::record(FilterEvent::ShapeClassified { kind });

        Ok(shape)
    }

    /// Parse and classify one JSON document.
    pub fn from_json_str(input: &str) -> Result<Self, FilterError> {
        let json: JsonValue = serde_json::from_str(input)?;

        Self::try_from(json)
    }

    /// Canonical column-keyed form. An operator-keyed shape is attached to
    /// `column`; a column-keyed shape is returned unchanged.
    #[must_use]
    pub fn into_by_column(self, column: &str) -> FiltersByColumn {
        match self {
            Self::ByColumn(filters) => filters,
            Self::ByOperator(record) if record.is_empty() => FiltersByColumn::new(),
            Self::ByOperator(record) => record.for_column(column),
        }
    }
}

impl TryFrom<JsonValue> for FilterShape {
    type Error = FilterError;

    fn try_from(json: JsonValue) -> Result<Self, Self::Error> {
        match json {
            JsonValue::Object(object) => Self::try_from_json_object(object),
            other => Err(FilterError::NotAnObject {
                found: json_kind(&other),
            }),
        }
    }
}

impl From<FiltersByColumn> for FilterShape {
    fn from(filters: FiltersByColumn) -> Self {
        Self::ByColumn(filters)
    }
}

impl From<OperatorRecord> for FilterShape {
    fn from(record: OperatorRecord) -> Self {
        Self::ByOperator(record)
    }
}

const fn json_kind(json: &JsonValue) -> &'static str {
    match json {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "bool",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
