//! Column/operator filter grammar: construction, shape discrimination, and
//! in-memory evaluation.
//!
//! Data flow: builder → `FiltersByColumn` → store adapter. A remote adapter
//! translates [`FiltersByColumn::terms`] into its native clause; a local
//! adapter evaluates rows with [`row_matches`] or a compiled
//! [`FilterProgram`].

mod builder;
mod column;
mod fingerprint;
mod operator;
mod program;
mod record;
mod row;
mod semantics;
mod shape;

#[cfg(test)]
mod tests;

pub use builder::{Column, build, where_eq, where_in};
pub use column::{FilterTerm, FiltersByColumn, WhereClause};
pub use operator::{FilterOp, OperatorArity, is_array_value_operator, is_single_value_operator};
pub use program::FilterProgram;
pub use record::{FiltersByOperator, OperatorRecord};
pub use row::{FieldPresence, MissingFieldPolicy, Row, row_matches, row_matches_with_policy};
pub use semantics::matches_value;
pub use shape::{
    FilterShape, ObjectKeys, ShapeKind, classify, is_filters_by_column_object,
    is_filters_by_operator_object,
};

pub(crate) use fingerprint::hash_filters;
pub(crate) use row::column_matches;
