use serde::Serialize;

use super::Aggregate;
use crate::data::model::Dataset;

/// Ratings of every company in one size bucket, in dataset order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeGroup {
    pub size: String,
    pub ratings: Vec<f64>,
}

/// Group non-null ratings by `size`.
///
/// Groups appear in order of first appearance of their size. Records with a
/// null size are skipped, and a size none of whose records has a rating gets
/// no group at all.
pub fn rating_by_size(dataset: &Dataset) -> Aggregate<Vec<SizeGroup>> {
    if dataset.is_empty() {
        return Aggregate::Empty;
    }
    let mut groups: Vec<SizeGroup> = Vec::new();
    for record in dataset {
        let (Some(size), Some(rating)) = (record.size.as_deref(), record.company_rating) else {
            continue;
        };
        match groups.iter_mut().find(|g| g.size == size) {
            Some(group) => group.ratings.push(rating),
            None => groups.push(SizeGroup {
                size: size.to_string(),
                ratings: vec![rating],
            }),
        }
    }
    Aggregate::Available(groups)
}
