//! Rating analytics over a (usually filtered) dataset.
//!
//! Every aggregator is a pure function of the dataset it is given and returns
//! structured numbers, never rendered charts. Results are wrapped in
//! [`Aggregate`] so an empty selection can be told apart from a column that
//! holds no usable data.

pub mod grouping;
pub mod histogram;
pub mod overview;

use serde::Serialize;

pub use grouping::{rating_by_size, SizeGroup};
pub use histogram::{age_histogram, rating_histogram, Histogram, DEFAULT_BIN_COUNT};
pub use overview::{
    rating_by_top_name, rating_overview, AnalyticsReport, RatedName, RatingOverview,
    DEFAULT_TOP_NAMES,
};

/// Outcome of an aggregate computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum Aggregate<T> {
    /// The aggregate was computed.
    Available(T),
    /// The dataset had no rows to aggregate.
    Empty,
    /// The column the aggregate needs is missing or holds only nulls.
    Unavailable,
}

impl<T> Aggregate<T> {
    /// The computed value, if any.
    pub fn available(&self) -> Option<&T> {
        match self {
            Aggregate::Available(value) => Some(value),
            Aggregate::Empty | Aggregate::Unavailable => None,
        }
    }
}
