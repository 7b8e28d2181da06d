use serde::Serialize;

use super::grouping::{rating_by_size, SizeGroup};
use super::histogram::{age_histogram, rating_histogram, Histogram, DEFAULT_BIN_COUNT};
use super::Aggregate;
use crate::data::filter::{filter, FilterCriteria, FilterOptions};
use crate::data::model::Dataset;
use crate::data::ranking::top_by_rating;

/// Number of companies in the top-by-name ranking.
pub const DEFAULT_TOP_NAMES: usize = 10;

/// A company name with its rating, as plotted in the ranking bar chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedName {
    pub name: String,
    pub rating: f64,
}

/// The `n` best rated companies as (name, rating) pairs.
pub fn rating_by_top_name(dataset: &Dataset, n: usize) -> Aggregate<Vec<RatedName>> {
    if dataset.is_empty() {
        return Aggregate::Empty;
    }
    let ranked = top_by_rating(dataset, n)
        .into_iter()
        .filter_map(|r| {
            r.company_rating.map(|rating| RatedName {
                name: r.company_name,
                rating,
            })
        })
        .collect();
    Aggregate::Available(ranked)
}

/// Rating histogram, size grouping and top names bundled for one dashboard.
///
/// Each part keeps its own empty/unavailable state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingOverview {
    pub histogram: Aggregate<Histogram>,
    pub by_size: Aggregate<Vec<SizeGroup>>,
    pub top_by_name: Aggregate<Vec<RatedName>>,
}

pub fn rating_overview(dataset: &Dataset) -> RatingOverview {
    RatingOverview {
        histogram: rating_histogram(dataset, DEFAULT_BIN_COUNT),
        by_size: rating_by_size(dataset),
        top_by_name: rating_by_top_name(dataset, DEFAULT_TOP_NAMES),
    }
}

/// Everything the analytics view shows for one set of criteria.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub criteria: FilterCriteria,
    /// Dropdown options, always taken from the unfiltered dataset.
    pub options: FilterOptions,
    pub filtered_count: usize,
    pub age_histogram: Aggregate<Histogram>,
    pub rating_histogram: Aggregate<Histogram>,
    pub rating_by_size: Aggregate<Vec<SizeGroup>>,
    pub rating_by_top_name: Aggregate<Vec<RatedName>>,
    pub overview: RatingOverview,
}

impl AnalyticsReport {
    /// Filter `dataset` by `criteria` and compute every aggregate over the result.
    pub fn build(dataset: &Dataset, criteria: &FilterCriteria, bin_count: usize) -> Self {
        let filtered = filter(dataset, criteria);
        AnalyticsReport {
            criteria: criteria.clone(),
            options: FilterOptions::from_dataset(dataset),
            filtered_count: filtered.len(),
            age_histogram: age_histogram(&filtered, bin_count),
            rating_histogram: rating_histogram(&filtered, bin_count),
            rating_by_size: rating_by_size(&filtered),
            rating_by_top_name: rating_by_top_name(&filtered, DEFAULT_TOP_NAMES),
            overview: rating_overview(&filtered),
        }
    }
}
