use crate::{
    filter::{FiltersByColumn, OperatorRecord},
    value::Value,
};
use serde_json::{Map as JsonMap, Value as JsonValue};
use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

///
/// FieldPresence
///
/// Result of attempting to read a field from a row during filter
/// evaluation. This distinguishes between a missing field and a present
/// field whose value may be `Value::Null`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldPresence<'a> {
    /// Field exists and has a value (including `Value::Null`).
    Present(Cow<'a, Value>),

    /// Field exists but holds a shape no filter target can equal.
    Opaque,

    /// Field is not present on the row.
    Missing,
}

///
/// Row
///
/// Abstraction over a record that can expose fields by name.
/// This decouples filter evaluation from concrete record types.
///

pub trait Row {
    fn field(&self, name: &str) -> FieldPresence<'_>;
}

impl Row for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> FieldPresence<'_> {
        self.get(name).map_or(FieldPresence::Missing, |value| {
            FieldPresence::Present(Cow::Borrowed(value))
        })
    }
}

impl<S: BuildHasher> Row for HashMap<String, Value, S> {
    fn field(&self, name: &str) -> FieldPresence<'_> {
        self.get(name).map_or(FieldPresence::Missing, |value| {
            FieldPresence::Present(Cow::Borrowed(value))
        })
    }
}

impl Row for JsonMap<String, JsonValue> {
    fn field(&self, name: &str) -> FieldPresence<'_> {
        let Some(json) = self.get(name) else {
            return FieldPresence::Missing;
        };

        Value::try_from_json(json).map_or(FieldPresence::Opaque, |value| {
            FieldPresence::Present(Cow::Owned(value))
        })
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, name: &str) -> FieldPresence<'_> {
        (**self).field(name)
    }
}

///
/// MissingFieldPolicy
///
/// How a filtered column that the row does not carry is evaluated.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MissingFieldPolicy {
    /// A missing field fails every operator on it.
    #[default]
    NoMatch,

    /// A missing field is evaluated as `Value::Null`.
    TreatAsNull,
}

/// Decide whether `row` satisfies every operator of every column in
/// `filters`. The empty filter matches every row.
#[must_use]
pub fn row_matches<R: Row + ?Sized>(row: &R, filters: &FiltersByColumn) -> bool {
    row_matches_with_policy(row, filters, MissingFieldPolicy::default())
}

/// [`row_matches`] with an explicit missing-field policy.
#[must_use]
pub fn row_matches_with_policy<R: Row + ?Sized>(
    row: &R,
    filters: &FiltersByColumn,
    policy: MissingFieldPolicy,
) -> bool {
    filters
        .iter()
        .all(|(column, record)| column_matches(row, column, record, policy))
}

// Evaluate one column's operator record; an empty record is vacuously true.
pub(crate) fn column_matches<R: Row + ?Sized>(
    row: &R,
    column: &str,
    record: &OperatorRecord,
    policy: MissingFieldPolicy,
) -> bool {
    if record.is_empty() {
        return true;
    }

    match row.field(column) {
        FieldPresence::Present(actual) => record.matches_value(&actual),
        FieldPresence::Opaque => false,
        FieldPresence::Missing => match policy {
            MissingFieldPolicy::NoMatch => false,
            MissingFieldPolicy::TreatAsNull => record.matches_value(&Value::Null),
        },
    }
}
