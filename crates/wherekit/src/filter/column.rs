use crate::{
    filter::{FilterOp, OperatorRecord, hash_filters},
    value::Value,
};
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

///
/// FiltersByColumn
///
/// Canonical filter shape consumed by every store adapter:
/// `{ column: { op: value } }`. Columns absent from the map are
/// unconstrained; the empty map matches every row.
///

#[derive(Clone, Debug, Default, Deref, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FiltersByColumn(BTreeMap<String, OperatorRecord>);

impl FiltersByColumn {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Constrain one more column. A record already present for the column is
    /// replaced.
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>, record: OperatorRecord) -> Self {
        self.0.insert(column.into(), record);
        self
    }

    /// Borrow the operator record for one column.
    #[must_use]
    pub fn column(&self, column: &str) -> Option<&OperatorRecord> {
        self.0.get(column)
    }

    /// Flat (column, operator, target) view in deterministic order.
    ///
    /// Remote adapters translate these terms into their native clause.
    pub fn terms(&self) -> impl Iterator<Item = FilterTerm<'_>> {
        self.0.iter().flat_map(|(column, record)| {
            record.iter().map(move |(op, value)| FilterTerm {
                column: column.as_str(),
                op: *op,
                value,
            })
        })
    }

    /// Number of (column, operator) terms across all columns.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.0.values().map(|record| record.len()).sum()
    }

    /// Stable SHA-256 fingerprint of this filter's terms.
    #[must_use]
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hash_filters(&mut hasher, self);

        hasher.finalize().into()
    }
}

impl FromIterator<(String, OperatorRecord)> for FiltersByColumn {
    fn from_iter<I: IntoIterator<Item = (String, OperatorRecord)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a FiltersByColumn {
    type Item = (&'a String, &'a OperatorRecord);
    type IntoIter = std::collections::btree_map::Iter<'a, String, OperatorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

///
/// FilterTerm
///
/// One borrowed (column, operator, target) triple.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FilterTerm<'a> {
    pub column: &'a str,
    pub op: FilterOp,
    pub value: &'a Value,
}

///
/// WhereClause
///
/// Builder envelope: `{ "where": { column: { op: value } } }`.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct WhereClause {
    #[serde(rename = "where")]
    pub filters: FiltersByColumn,
}

impl WhereClause {
    #[must_use]
    pub const fn new(filters: FiltersByColumn) -> Self {
        Self { filters }
    }

    #[must_use]
    pub fn into_filters(self) -> FiltersByColumn {
        self.filters
    }
}

impl From<WhereClause> for FiltersByColumn {
    fn from(clause: WhereClause) -> Self {
        clause.filters
    }
}
