use serde::Serialize;

use super::Aggregate;
use crate::data::model::{Column, Dataset};

/// Default number of histogram bins.
pub const DEFAULT_BIN_COUNT: usize = 20;

/// Ages outside this open interval are treated as bad input.
const VALID_AGE: (f64, f64) = (0.0, 200.0);

/// Equal-width histogram.
///
/// `edges` has one more entry than `counts`; bin `i` covers
/// `[edges[i], edges[i + 1])`, except the last bin which is closed on the right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bin_count` equal-width bins over their range.
    ///
    /// NaN and infinite values are skipped. Returns `None` when no finite
    /// value is left. A `bin_count` of zero is treated as one. When every
    /// value is equal the range is widened to `v ± 0.5`.
    pub fn from_values(values: &[f64], bin_count: usize) -> Option<Histogram> {
        let bins = bin_count.max(1);
        let finite = || values.iter().copied().filter(|v| v.is_finite());
        let (mut lo, mut hi) = finite().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((f64::min(lo, v), f64::max(hi, v))),
        })?;
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
        edges.push(hi);

        let mut counts = vec![0; bins];
        for v in finite() {
            let mut idx = (((v - lo) / width) as usize).min(bins - 1);
            // Rounding in the division can land one bin off near an edge.
            if v < edges[idx] {
                idx -= 1;
            } else if idx + 1 < bins && v >= edges[idx + 1] {
                idx += 1;
            }
            counts[idx] += 1;
        }
        Some(Histogram { edges, counts })
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Histogram of `company_rating`.
///
/// Null ratings are skipped. A dataset whose ratings are all null is
/// [`Aggregate::Unavailable`].
pub fn rating_histogram(dataset: &Dataset, bin_count: usize) -> Aggregate<Histogram> {
    if dataset.is_empty() {
        return Aggregate::Empty;
    }
    let ratings: Vec<f64> = dataset.iter().filter_map(|r| r.company_rating).collect();
    match Histogram::from_values(&ratings, bin_count) {
        Some(histogram) => Aggregate::Available(histogram),
        None => Aggregate::Unavailable,
    }
}

/// Histogram of `years_old`, restricted to `0 < years_old < 200`.
///
/// A missing or all-null column is [`Aggregate::Unavailable`]; a column whose
/// values are all out of range is [`Aggregate::Empty`].
pub fn age_histogram(dataset: &Dataset, bin_count: usize) -> Aggregate<Histogram> {
    if dataset.is_empty() {
        return Aggregate::Empty;
    }
    if !dataset.has_column(Column::YearsOld) || dataset.iter().all(|r| r.years_old.is_none()) {
        return Aggregate::Unavailable;
    }
    let (min, max) = VALID_AGE;
    let ages: Vec<f64> = dataset
        .iter()
        .filter_map(|r| r.years_old)
        .filter(|&age| age > min && age < max)
        .collect();
    match Histogram::from_values(&ages, bin_count) {
        Some(histogram) => Aggregate::Available(histogram),
        None => Aggregate::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CompanyRecord;
    use crate::test_utils::{company, get_test_dataset, get_test_dataset_abc};

    fn aged(ages: &[f64]) -> Dataset {
        Dataset::from_records(
            ages.iter()
                .map(|&age| CompanyRecord {
                    years_old: Some(age),
                    ..CompanyRecord::named("Acme")
                })
                .collect(),
        )
    }

    #[test]
    fn from_values_equal_width() {
        let histogram = Histogram::from_values(&[1.0, 2.0, 3.0, 4.0, 5.0], 4).unwrap();
        assert_eq!(vec![1.0, 2.0, 3.0, 4.0, 5.0], histogram.edges);
        // The maximum lands in the last, right-closed bin.
        assert_eq!(vec![1, 1, 1, 2], histogram.counts);
    }

    #[test]
    fn from_values_single_value() {
        let histogram = Histogram::from_values(&[3.0, 3.0], 2).unwrap();
        assert_eq!(vec![2.5, 3.0, 3.5], histogram.edges);
        assert_eq!(vec![0, 2], histogram.counts);
    }

    #[test]
    fn from_values_zero_bins_is_one_bin() {
        let histogram = Histogram::from_values(&[0.5, 4.5], 0).unwrap();
        assert_eq!(vec![0.5, 4.5], histogram.edges);
        assert_eq!(vec![2], histogram.counts);
    }

    #[test]
    fn from_values_empty() {
        assert_eq!(None, Histogram::from_values(&[], 20));
    }

    #[test]
    fn from_values_skips_non_finite() {
        let values = [f64::NAN, 1.0, f64::INFINITY, 3.0, f64::NEG_INFINITY];
        let histogram = Histogram::from_values(&values, 2).unwrap();
        assert_eq!(vec![1.0, 2.0, 3.0], histogram.edges);
        assert_eq!(vec![1, 1], histogram.counts);
        assert_eq!(None, Histogram::from_values(&[f64::NAN, f64::INFINITY], 2));
    }

    #[test]
    fn from_values_counts_every_value() {
        let values: Vec<f64> = (0..97).map(|i| 1.0 + (i as f64) * 0.041).collect();
        let histogram = Histogram::from_values(&values, DEFAULT_BIN_COUNT).unwrap();
        assert_eq!(DEFAULT_BIN_COUNT, histogram.counts.len());
        assert_eq!(DEFAULT_BIN_COUNT + 1, histogram.edges.len());
        assert_eq!(values.len(), histogram.total());
    }

    #[test]
    fn rating_histogram_abc() {
        let histogram = rating_histogram(&get_test_dataset_abc(), 2);
        let histogram = histogram.available().unwrap();
        assert_eq!(vec![3.0, 4.0, 5.0], histogram.edges);
        assert_eq!(vec![1, 2], histogram.counts);
    }

    #[test]
    fn rating_histogram_skips_nulls() {
        let histogram = rating_histogram(&get_test_dataset(), DEFAULT_BIN_COUNT);
        assert_eq!(6, histogram.available().unwrap().total());
    }

    #[test]
    fn rating_histogram_ignores_nan_ratings() {
        let dataset = Dataset::from_records(vec![
            company("NanCo", "Tech", f64::NAN),
            company("Four", "Tech", 4.0),
            company("Five", "Tech", 5.0),
        ]);
        let histogram = rating_histogram(&dataset, 2);
        let histogram = histogram.available().unwrap();
        assert_eq!(vec![4.0, 4.5, 5.0], histogram.edges);
        assert_eq!(vec![1, 1], histogram.counts);
    }

    #[test]
    fn rating_histogram_empty_dataset() {
        let dataset = Dataset::from_records(vec![]);
        assert_eq!(Aggregate::Empty, rating_histogram(&dataset, DEFAULT_BIN_COUNT));
    }

    #[test]
    fn rating_histogram_all_null() {
        let dataset = Dataset::from_records(vec![CompanyRecord::named("Ghost")]);
        assert_eq!(
            Aggregate::Unavailable,
            rating_histogram(&dataset, DEFAULT_BIN_COUNT)
        );
    }

    #[test]
    fn age_histogram_drops_out_of_range() {
        let histogram = age_histogram(&aged(&[-5.0, 0.0, 10.0, 20.0, 200.0, 350.0]), 2);
        let histogram = histogram.available().unwrap();
        assert_eq!(vec![10.0, 15.0, 20.0], histogram.edges);
        assert_eq!(vec![1, 1], histogram.counts);
    }

    #[test]
    fn age_histogram_all_invalid_is_empty() {
        assert_eq!(
            Aggregate::Empty,
            age_histogram(&aged(&[-5.0, -5.0, -5.0]), DEFAULT_BIN_COUNT)
        );
    }

    #[test]
    fn age_histogram_missing_column_is_unavailable() {
        let columns = Column::ALL
            .into_iter()
            .filter(|c| *c != Column::YearsOld)
            .collect();
        let dataset = Dataset::with_columns(vec![CompanyRecord::named("Acme")], columns);
        assert_eq!(
            Aggregate::Unavailable,
            age_histogram(&dataset, DEFAULT_BIN_COUNT)
        );
    }

    #[test]
    fn age_histogram_all_null_is_unavailable() {
        let dataset = Dataset::from_records(vec![CompanyRecord::named("Acme")]);
        assert_eq!(
            Aggregate::Unavailable,
            age_histogram(&dataset, DEFAULT_BIN_COUNT)
        );
    }

    #[test]
    fn age_histogram_empty_dataset() {
        assert_eq!(
            Aggregate::Empty,
            age_histogram(&Dataset::from_records(vec![]), DEFAULT_BIN_COUNT)
        );
    }
}
