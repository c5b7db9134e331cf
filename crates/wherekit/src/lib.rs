//! Core filter layer for wherekit: a typed "column satisfies operator against
//! value" grammar, its wire shapes, and the in-memory evaluator that local
//! caches run against stored rows.
//!
//! Remote and local store adapters both consume the canonical
//! [`filter::FiltersByColumn`] shape; nothing in this crate performs I/O.
#![warn(unreachable_pub)]

#[macro_use]
mod macros;

// public exports are one module level down
pub mod error;
pub mod filter;
pub mod obs;
pub mod value;

///
/// Prelude
///
/// Prelude contains the vocabulary needed to build and evaluate filters.
/// Observability sinks and decode helpers stay behind their modules.
///

pub mod prelude {
    pub use crate::{
        filter::{
            Column, FilterOp, FilterProgram, FilterShape, FiltersByColumn, FiltersByOperator,
            OperatorRecord, Row, WhereClause, build, row_matches, where_eq, where_in,
        },
        value::Value,
    };
}
