use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::model::{CompanyRecord, Dataset, TextColumn};

// ---------------------------------------------------------------------------
// Filter predicate: optional narrowing constraints
// ---------------------------------------------------------------------------

/// Optional constraints applied conjunctively by [`filter`].
///
/// A field that is `None`, an empty string, or (for `min_rating`) exactly `0`
/// imposes no constraint. The `active_*` accessors apply that rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub text_query: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    #[serde(rename = "type")]
    pub company_type: Option<String>,
    pub min_rating: Option<f64>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl FilterCriteria {
    /// Build criteria from request-style parameters.
    ///
    /// Recognised keys are `q`, `industry`, `location`, `size`, `type` and
    /// `min_rating`; unknown keys are ignored. A `min_rating` that does not
    /// parse as a number is left unset.
    pub fn from_params<I, K, V>(params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = FilterCriteria::default();
        for (key, value) in params {
            let value = value.as_ref();
            match key.as_ref() {
                "q" => criteria.text_query = Some(value.to_string()),
                "industry" => criteria.industry = Some(value.to_string()),
                "location" => criteria.location = Some(value.to_string()),
                "size" => criteria.size = Some(value.to_string()),
                "type" => criteria.company_type = Some(value.to_string()),
                "min_rating" => criteria.min_rating = value.trim().parse::<f64>().ok(),
                _ => {}
            }
        }
        criteria
    }

    pub fn active_text_query(&self) -> Option<&str> {
        non_empty(&self.text_query)
    }

    /// Active exact-match constraint for a text column.
    pub fn active_equals(&self, column: TextColumn) -> Option<&str> {
        match column {
            TextColumn::CompanyName => None,
            TextColumn::Industry => non_empty(&self.industry),
            TextColumn::Location => non_empty(&self.location),
            TextColumn::Size => non_empty(&self.size),
            TextColumn::Type => non_empty(&self.company_type),
        }
    }

    /// Active rating floor. Zero counts as unset, so it never filters out null ratings.
    pub fn active_min_rating(&self) -> Option<f64> {
        self.min_rating.filter(|m| *m != 0.0 && !m.is_nan())
    }

    /// Whether no field narrows the result.
    pub fn is_unconstrained(&self) -> bool {
        self.active_text_query().is_none()
            && EQUALITY_COLUMNS
                .iter()
                .all(|c| self.active_equals(*c).is_none())
            && self.active_min_rating().is_none()
    }

    /// Whether a single record satisfies every active constraint.
    pub fn matches(&self, record: &CompanyRecord) -> bool {
        if let Some(query) = self.active_text_query() {
            if !record
                .company_name
                .to_lowercase()
                .contains(&query.to_lowercase())
            {
                return false;
            }
        }
        for column in EQUALITY_COLUMNS {
            if let Some(wanted) = self.active_equals(column) {
                if record.text(column) != Some(wanted) {
                    return false;
                }
            }
        }
        if let Some(min) = self.active_min_rating() {
            match record.company_rating {
                Some(rating) if rating >= min => {}
                _ => return false,
            }
        }
        true
    }
}

const EQUALITY_COLUMNS: [TextColumn; 4] = [
    TextColumn::Industry,
    TextColumn::Location,
    TextColumn::Size,
    TextColumn::Type,
];

/// Return the records passing all active constraints, in dataset order.
pub fn filter(dataset: &Dataset, criteria: &FilterCriteria) -> Dataset {
    if criteria.is_unconstrained() {
        return dataset.clone();
    }
    let records = dataset
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect();
    dataset.derive(records)
}

// ---------------------------------------------------------------------------
// Distinct values for filter dropdowns
// ---------------------------------------------------------------------------

/// Sorted, null-free, duplicate-free values of a text column.
pub fn distinct_values(dataset: &Dataset, column: TextColumn) -> Vec<String> {
    let values: BTreeSet<&str> = dataset.iter().filter_map(|r| r.text(column)).collect();
    values.into_iter().map(str::to_string).collect()
}

/// The option lists for every filterable column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    pub industries: Vec<String>,
    pub locations: Vec<String>,
    pub sizes: Vec<String>,
    pub types: Vec<String>,
}

impl FilterOptions {
    /// Compute the option lists. Callers pass the unfiltered dataset so the
    /// options stay the same whatever filter is active.
    pub fn from_dataset(dataset: &Dataset) -> Self {
        FilterOptions {
            industries: distinct_values(dataset, TextColumn::Industry),
            locations: distinct_values(dataset, TextColumn::Location),
            sizes: distinct_values(dataset, TextColumn::Size),
            types: distinct_values(dataset, TextColumn::Type),
        }
    }
}
