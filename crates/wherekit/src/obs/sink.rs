//! Filter event sink boundary.
//!
//! Filter logic MUST NOT hold counters or loggers directly.
//! All instrumentation flows through FilterEvent and FilterSink.
//!
//! With no override installed, events go to `NoopSink`; this layer keeps no
//! process-wide mutable state of its own.
use crate::{
    filter::{FilterOp, ShapeKind},
    value::ValueTag,
};
use serde::Serialize;
use std::cell::{Cell, RefCell};

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn FilterSink>> = const { RefCell::new(None) };
}

///
/// FilterEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FilterEvent {
    /// An untagged object was decoded through the key-set discriminator.
    ShapeClassified { kind: ShapeKind },

    /// An operator met a target of the wrong arity and degraded to no-match.
    MalformedTarget { op: FilterOp, found: ValueTag },

    /// A compiled program filtered one batch of rows.
    RowsFiltered { rows_scanned: u64, rows_matched: u64 },
}

///
/// FilterSink
///

pub trait FilterSink {
    fn record(&self, event: FilterEvent);
}

///
/// NoopSink
/// Default sink used when no scoped override is installed.
///

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl FilterSink for NoopSink {
    fn record(&self, _event: FilterEvent) {}
}

pub(crate) fn record(event: FilterEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // Preconditions:
        // - `ptr` was produced from a valid `&dyn FilterSink` in `with_filter_sink`.
        // - `with_filter_sink` always restores the previous pointer before returning,
        //   including unwind paths via `Guard::drop`.
        // - `record` is synchronous and never stores `ptr` beyond this call.
        //
        // Aliasing:
        // - Only a shared reference is materialized, matching the shared borrow
        //   used to install the override.
        //
        // What would break this:
        // - If `with_filter_sink` failed to restore on any exit, `ptr` could outlive
        //   the borrowed sink and dangle.
        // - If `record` were changed to dispatch asynchronously using `ptr`.
        unsafe { (&*ptr).record(event) };
    } else {
        NoopSink.record(event);
    }
}

/// Run a closure with a temporary filter sink override on this thread.
pub fn with_filter_sink<T>(sink: &dyn FilterSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn FilterSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // Preconditions:
    // - `sink_ptr` is installed only for this dynamic scope.
    // - `Guard` restores the previous slot on all exits, including panic.
    // - `record` only dereferences synchronously and never persists `sink_ptr`.
    //
    // What would break this:
    // - Any deferred use of `sink_ptr` beyond this scope.
    // - Any path that bypasses Guard restoration.
    let sink_ptr = unsafe { std::mem::transmute::<&dyn FilterSink, *const dyn FilterSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| cell.borrow_mut().replace(sink_ptr));
    let _guard = Guard(prev);

    f()
}

///
/// FilterReport
/// Point-in-time counter snapshot taken from a `FilterCounters` sink.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FilterReport {
    pub shapes_by_column: u64,
    pub shapes_by_operator: u64,
    pub malformed_targets: u64,
    pub batches: u64,
    pub rows_scanned: u64,
    pub rows_matched: u64,
}

///
/// FilterCounters
///
/// Counting sink for adapters and tests. Lives on one thread, like the
/// override slot it is installed into.
///

#[derive(Debug, Default)]
pub struct FilterCounters {
    report: Cell<FilterReport>,
}

impl FilterCounters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn report(&self) -> FilterReport {
        self.report.get()
    }

    pub fn reset(&self) {
        self.report.set(FilterReport::default());
    }
}

impl FilterSink for FilterCounters {
    fn record(&self, event: FilterEvent) {
        let mut r = self.report.get();

        match event {
            FilterEvent::ShapeClassified { kind } => match kind {
                ShapeKind::ByColumn => r.shapes_by_column = r.shapes_by_column.saturating_add(1),
                ShapeKind::ByOperator => {
                    r.shapes_by_operator = r.shapes_by_operator.saturating_add(1);
                }
            },
            FilterEvent::MalformedTarget { .. } => {
                r.malformed_targets = r.malformed_targets.saturating_add(1);
            }
            FilterEvent::RowsFiltered {
                rows_scanned,
                rows_matched,
            } => {
                r.batches = r.batches.saturating_add(1);
                r.rows_scanned = r.rows_scanned.saturating_add(rows_scanned);
                r.rows_matched = r.rows_matched.saturating_add(rows_matched);
            }
        }

        self.report.set(r);
    }
}
