use crate::data::model::{CompanyRecord, Dataset};

/// Create a CompanyRecord with the attributes most tests care about.
pub(crate) fn company(name: &str, industry: &str, rating: f64) -> CompanyRecord {
    CompanyRecord {
        industry: Some(industry.to_string()),
        company_rating: Some(rating),
        ..CompanyRecord::named(name)
    }
}

/// Create a CompanyRecord with all fields set.
pub(crate) fn company_full(
    name: &str,
    industry: &str,
    location: &str,
    size: &str,
    company_type: &str,
    rating: f64,
    years_old: f64,
) -> CompanyRecord {
    CompanyRecord {
        company_name: name.to_string(),
        industry: Some(industry.to_string()),
        location: Some(location.to_string()),
        size: Some(size.to_string()),
        company_type: Some(company_type.to_string()),
        company_rating: Some(rating),
        years_old: Some(years_old),
    }
}

/// The three-company dataset: A (Tech, 4.5), B (Tech, 3.0), C (Retail, 5.0).
pub(crate) fn get_test_dataset_abc() -> Dataset {
    Dataset::from_records(vec![
        company("A", "Tech", 4.5),
        company("B", "Tech", 3.0),
        company("C", "Retail", 5.0),
    ])
}

/// A richer dataset with nulls, duplicate names, and tied ratings.
pub(crate) fn get_test_dataset() -> Dataset {
    Dataset::from_records(vec![
        company_full("Infosys", "IT Services", "Bangalore", "10000+", "Public", 3.9, 42.0),
        company_full("TCS", "IT Services", "Mumbai", "10000+", "Public", 3.8, 55.0),
        company_full("Zomato", "Internet", "Gurgaon", "1001-5000", "Public", 4.1, 15.0),
        company_full("Acme", "Retail", "Mumbai", "51-200", "Private", 3.8, 8.0),
        company_full("Acme", "IT Services", "Pune", "201-500", "Private", 4.4, 3.0),
        CompanyRecord {
            location: Some("Chennai".to_string()),
            size: Some("51-200".to_string()),
            company_rating: None,
            years_old: Some(-1.0),
            ..company("Nullrate", "Retail", 0.0)
        },
        CompanyRecord::named("Ghost"),
        company_full("Flipkart", "Internet", "Bangalore", "10000+", "Private", 4.1, 17.0),
    ])
}
