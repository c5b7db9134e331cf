//! Module: filter::operator
//! Responsibility: the closed operator set and its arity classification.
//! Does not own: operator evaluation semantics.
//! Boundary: every component that branches on operator kind matches here.

use crate::error::FilterError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

///
/// FilterOp
///
/// Closed set of comparison kinds. Adding a member forces every exhaustive
/// match in this crate (arity, matching, naming, fingerprint tag) to be
/// extended before it compiles.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum FilterOp {
    Eq = 0x01,
    In = 0x02,
}

impl FilterOp {
    /// Every operator, in canonical order.
    pub const ALL: [Self; 2] = [Self::Eq, Self::In];

    /// Stable tag used by fingerprint encodings.
    #[must_use]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Wire name of this operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::In => "in",
        }
    }

    /// Parse a wire name; `None` for anything outside the closed set.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "eq" => Some(Self::Eq),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    #[must_use]
    pub const fn arity(self) -> OperatorArity {
        match self {
            Self::Eq => OperatorArity::Single,
            Self::In => OperatorArity::Array,
        }
    }

    /// True iff this operator expects a single scalar target.
    #[must_use]
    pub const fn is_single_value(self) -> bool {
        match self {
            Self::Eq => true,
            Self::In => false,
        }
    }

    /// True iff this operator expects a sequence target.
    #[must_use]
    pub const fn is_array_value(self) -> bool {
        match self {
            Self::Eq => false,
            Self::In => true,
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterOp {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| FilterError::unknown_operator(s))
    }
}

///
/// OperatorArity
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperatorArity {
    Single,
    Array,
}

/// True iff `op` takes a single scalar target.
#[must_use]
pub const fn is_single_value_operator(op: FilterOp) -> bool {
    op.is_single_value()
}

/// True iff `op` takes a sequence target.
#[must_use]
pub const fn is_array_value_operator(op: FilterOp) -> bool {
    op.is_array_value()
}

///
/// TESTS
///
