//! Module: filter::semantics
//! Responsibility: one operator against one actual value and one target.
//! Does not own: row field lookup or filter shape.
//! Boundary: row and program evaluation delegate every comparison here.

use crate::{
    filter::FilterOp,
    obs::{FilterEvent, sink},
    value::Value,
};
use std::mem::discriminant;

/// Evaluate `actual <op> target`.
///
/// `Eq` is same-variant structural equality with no coercion. `In` requires a
/// list target; any other target degrades to `false` instead of failing the
/// whole row.
#[must_use]
pub fn matches_value(actual: &Value, op: FilterOp, target: &Value) -> bool {
    match op {
        FilterOp::Eq => compare_eq(actual, target),
        FilterOp::In => in_list(actual, target).unwrap_or_else(|| {
            sink::record(FilterEvent::MalformedTarget {
                op,
                found: target.tag(),
            });
            false
        }),
    }
}

/// Strict equality: variants must match before payloads are compared.
#[must_use]
fn compare_eq(left: &Value, right: &Value) -> bool {
    same_variant(left, right) && left == right
}

// Check whether a value equals any element in a list; `None` when the target
// is not a list.
fn in_list(actual: &Value, list: &Value) -> Option<bool> {
    let items = list.as_list()?;

    Some(items.iter().any(|item| compare_eq(actual, item)))
}

fn same_variant(left: &Value, right: &Value) -> bool {
    discriminant(left) == discriminant(right)
}

///
/// TESTS
///
