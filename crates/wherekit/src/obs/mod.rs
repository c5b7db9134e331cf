//! Observability: filter evaluation events and sink abstractions.
//!
//! Evaluation stays pure with respect to its inputs; the only side channel
//! is the scoped sink installed by [`with_filter_sink`].

pub(crate) mod sink;

// re-exports
pub use sink::{
    FilterCounters, FilterEvent, FilterReport, FilterSink, NoopSink, with_filter_sink,
};
