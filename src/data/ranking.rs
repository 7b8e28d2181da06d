use super::model::{CompanyRecord, Dataset};
use crate::error::{Error, Result};

/// Number of related companies shown alongside a company.
pub const DEFAULT_RELATED: usize = 4;

/// Records with a rating, highest first. Equal ratings keep dataset order.
fn ranked<'a, I>(records: I, n: usize) -> Vec<&'a CompanyRecord>
where
    I: IntoIterator<Item = &'a CompanyRecord>,
{
    let mut rated: Vec<(f64, &CompanyRecord)> = records
        .into_iter()
        .filter_map(|r| {
            r.company_rating
                .filter(|v| v.is_finite())
                .map(|rating| (rating, r))
        })
        .collect();
    // sort_by is stable, which is what keeps ties in dataset order.
    rated.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    rated.into_iter().take(n).map(|(_, r)| r).collect()
}

/// Up to `n` records with the highest `company_rating`, descending.
///
/// Records with a null rating are never selected.
pub fn top_by_rating(dataset: &Dataset, n: usize) -> Vec<CompanyRecord> {
    ranked(dataset, n).into_iter().cloned().collect()
}

/// First record, in dataset order, whose name is exactly `name`.
pub fn find_company(dataset: &Dataset, name: &str) -> Result<CompanyRecord> {
    dataset
        .iter()
        .find(|r| r.company_name == name)
        .cloned()
        .ok_or_else(|| Error::CompanyNotFound {
            name: name.to_string(),
        })
}

/// Up to `n` of the best rated records in the same industry as `company`.
///
/// Every record sharing `company`'s name is excluded, not just `company` itself.
pub fn related_companies(
    dataset: &Dataset,
    company: &CompanyRecord,
    n: usize,
) -> Vec<CompanyRecord> {
    let Some(industry) = company.industry.as_deref() else {
        return Vec::new();
    };
    let candidates = dataset.iter().filter(|r| {
        r.industry.as_deref() == Some(industry) && r.company_name != company.company_name
    });
    ranked(candidates, n).into_iter().cloned().collect()
}
