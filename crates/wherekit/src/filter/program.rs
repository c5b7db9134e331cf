use crate::{
    filter::{
        FilterOp, FiltersByColumn, MissingFieldPolicy, OperatorRecord, Row, column_matches,
    },
    obs::{FilterEvent, sink},
    value::Value,
};

///
/// FilterProgram
///
/// Filter flattened once into per-column operator lists for batch
/// evaluation. Semantics are identical to `row_matches`; columns with an
/// empty operator record are dropped at compile time.
///

#[derive(Clone, Debug)]
pub struct FilterProgram {
    columns: Vec<CompiledColumn>,
    missing_field: MissingFieldPolicy,
}

///
/// CompiledColumn
///

#[derive(Clone, Debug)]
struct CompiledColumn {
    column: String,
    record: OperatorRecord,
}

impl FilterProgram {
    /// Compile a column-keyed filter into an executable form.
    #[must_use]
    pub fn compile(filters: &FiltersByColumn) -> Self {
        let columns = filters
            .iter()
            .filter(|(_, record)| !record.is_empty())
            .map(|(column, record)| CompiledColumn {
                column: column.clone(),
                record: record.clone(),
            })
            .collect();

        Self {
            columns,
            missing_field: MissingFieldPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_missing_field_policy(mut self, policy: MissingFieldPolicy) -> Self {
        self.missing_field = policy;
        self
    }

    #[must_use]
    pub const fn missing_field_policy(&self) -> MissingFieldPolicy {
        self.missing_field
    }

    /// True when this program matches every row.
    #[must_use]
    pub fn is_trivial(&self) -> bool {
        self.columns.is_empty()
    }

    /// Borrow compiled terms in (column, operator) order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, FilterOp, &Value)> {
        self.columns.iter().flat_map(|compiled| {
            compiled
                .record
                .iter()
                .map(move |(op, value)| (compiled.column.as_str(), *op, value))
        })
    }

    /// Evaluate this program against one row.
    #[must_use]
    pub fn eval<R: Row + ?Sized>(&self, row: &R) -> bool {
        self.columns.iter().all(|compiled| {
            column_matches(row, &compiled.column, &compiled.record, self.missing_field)
        })
    }

    /// Borrow the rows that match, preserving input order.
    pub fn filter_rows<'a, R, I>(&self, rows: I) -> Vec<&'a R>
    where
        R: Row + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let mut scanned = 0usize;
        let matched: Vec<&R> = rows
            .into_iter()
            .inspect(|_| scanned += 1)
            .filter(|row| self.eval(*row))
            .collect();

        record_batch(scanned, matched.len());

        matched
    }

    /// Drop every row that does not match, preserving order.
    pub fn retain_matching<R: Row>(&self, rows: &mut Vec<R>) {
        let scanned = rows.len();
        rows.retain(|row| self.eval(row));

        record_batch(scanned, rows.len());
    }
}

impl From<&FiltersByColumn> for FilterProgram {
    fn from(filters: &FiltersByColumn) -> Self {
        Self::compile(filters)
    }
}

fn record_batch(scanned: usize, matched: usize) {
    sink::record(FilterEvent::RowsFiltered {
        rows_scanned: u64::try_from(scanned).unwrap_or(u64::MAX),
        rows_matched: u64::try_from(matched).unwrap_or(u64::MAX),
    });
}
