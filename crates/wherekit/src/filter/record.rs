use crate::{
    filter::{FilterOp, FiltersByColumn, matches_value},
    value::Value,
};
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// OperatorRecord
///
/// Operator → target mapping for one column. Several operators on one record
/// conjoin. Keys outside the closed operator set fail deserialization, so an
/// unknown operator never reaches evaluation.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OperatorRecord(BTreeMap<FilterOp, Value>);

/// A single column's predicate before it is attached to a column name.
pub type FiltersByOperator = OperatorRecord;

impl OperatorRecord {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// One-operator record; the arity of `value` is not checked.
    #[must_use]
    pub fn single(op: FilterOp, value: Value) -> Self {
        Self(BTreeMap::from([(op, value)]))
    }

    #[must_use]
    pub fn eq(value: impl Into<Value>) -> Self {
        Self::single(FilterOp::Eq, value.into())
    }

    pub fn in_<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Self::single(FilterOp::In, Value::list(values))
    }

    /// Add one more operator to this record; an existing target for the same
    /// operator is replaced.
    #[must_use]
    pub fn with(mut self, op: FilterOp, value: Value) -> Self {
        self.0.insert(op, value);
        self
    }

    /// Attach this record to a column, producing the canonical shape.
    #[must_use]
    pub fn for_column(self, column: impl Into<String>) -> FiltersByColumn {
        FiltersByColumn::new().with_column(column, self)
    }

    /// Conjunction of every operator in this record against one value.
    #[must_use]
    pub fn matches_value(&self, actual: &Value) -> bool {
        self.0
            .iter()
            .all(|(op, target)| matches_value(actual, *op, target))
    }
}

impl FromIterator<(FilterOp, Value)> for OperatorRecord {
    fn from_iter<I: IntoIterator<Item = (FilterOp, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OperatorRecord {
    type Item = (&'a FilterOp, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, FilterOp, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
