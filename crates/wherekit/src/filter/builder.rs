use crate::{
    filter::{FilterOp, FiltersByColumn, OperatorRecord, WhereClause},
    value::Value,
};
use std::{fmt, marker::PhantomData};

/// Build `{ where: { column: { op: value } } }` from one triple.
///
/// Arity is the caller's responsibility: a scalar for `Eq`, a list for `In`.
/// Prefer [`Column`] or [`where_eq`]/[`where_in`], which fix it by type.
#[must_use]
pub fn build(column: impl Into<String>, op: FilterOp, value: impl Into<Value>) -> WhereClause {
    let record = OperatorRecord::single(op, value.into());
    let filters = FiltersByColumn::new().with_column(column, record);

    WhereClause::new(filters)
}

/// Equality filter on one column.
#[must_use]
pub fn where_eq(column: impl Into<String>, value: impl Into<Value>) -> WhereClause {
    build(column, FilterOp::Eq, value)
}

/// Membership filter on one column.
pub fn where_in<I, T>(column: impl Into<String>, values: I) -> WhereClause
where
    I: IntoIterator<Item = T>,
    T: Into<Value>,
{
    build(column, FilterOp::In, Value::list(values))
}

///
/// Column
///
/// Named column handle carrying the field's declared value type, so `eq`
/// only accepts a `T` and `in_` only accepts a sequence of `T`.
///

pub struct Column<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Column<T> {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _marker: PhantomData,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: Into<Value>> Column<T> {
    #[must_use]
    pub fn eq(&self, value: T) -> WhereClause {
        where_eq(self.name, value)
    }

    pub fn in_<I>(&self, values: I) -> WhereClause
    where
        I: IntoIterator<Item = T>,
    {
        where_in(self.name, values)
    }
}

// manual impls: derives would bound T
impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Column<T> {}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Column").field(&self.name).finish()
    }
}

///
/// TESTS
///
