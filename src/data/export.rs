use std::io::Write;

use super::model::{Column, CompanyRecord, Dataset};
use crate::error::Result;

/// File name offered for CSV downloads of a search result.
pub const CSV_FILE_NAME: &str = "filtered_companies.csv";

fn cell(record: &CompanyRecord, column: Column) -> String {
    let text = |value: &Option<String>| value.clone().unwrap_or_default();
    // `{}` on f64 prints the shortest representation that parses back exactly.
    let number = |value: Option<f64>| value.map(|v| v.to_string()).unwrap_or_default();
    match column {
        Column::CompanyName => record.company_name.clone(),
        Column::Industry => text(&record.industry),
        Column::Location => text(&record.location),
        Column::Size => text(&record.size),
        Column::Type => text(&record.company_type),
        Column::CompanyRating => number(record.company_rating),
        Column::YearsOld => number(record.years_old),
    }
}

/// Write `dataset` as CSV: a header of its columns in load order, then one
/// row per record. Null values are written as empty cells.
pub fn write_csv<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(dataset.columns().iter().map(|c| c.name()))?;
    for record in dataset {
        wtr.write_record(dataset.columns().iter().map(|&c| cell(record, c)))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `dataset` as a JSON array of record objects.
pub fn write_json<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    serde_json::to_writer(writer, dataset.records())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::{load_csv_reader, load_json_reader};
    use crate::test_utils::get_test_dataset;

    fn csv_string(dataset: &Dataset) -> String {
        let mut out = Vec::new();
        write_csv(dataset, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn csv_header_and_quoting() {
        let dataset = Dataset::from_records(vec![CompanyRecord {
            company_rating: Some(4.25),
            ..CompanyRecord::named("Acme, \"The\" Company")
        }]);
        assert_eq!(
            "company_name,industry,location,size,type,company_rating,years_old\n\
             \"Acme, \"\"The\"\" Company\",,,,,4.25,\n",
            csv_string(&dataset)
        );
    }

    #[test]
    fn csv_round_trips() {
        let dataset = get_test_dataset();
        let reloaded = load_csv_reader(csv_string(&dataset).as_bytes()).unwrap();
        assert_eq!(dataset, reloaded);
    }

    #[test]
    fn csv_keeps_precision() {
        let dataset = Dataset::from_records(vec![CompanyRecord {
            company_rating: Some(0.1 + 0.2),
            years_old: Some(1.0 / 3.0),
            ..CompanyRecord::named("Precise")
        }]);
        let reloaded = load_csv_reader(csv_string(&dataset).as_bytes()).unwrap();
        assert_eq!(dataset.records(), reloaded.records());
    }

    #[test]
    fn csv_without_years_old_column() {
        let columns = vec![
            Column::CompanyName,
            Column::Industry,
            Column::Location,
            Column::Size,
            Column::Type,
            Column::CompanyRating,
        ];
        let dataset = Dataset::with_columns(vec![CompanyRecord::named("Acme")], columns);
        assert_eq!(
            "company_name,industry,location,size,type,company_rating\nAcme,,,,,\n",
            csv_string(&dataset)
        );
    }

    #[test]
    fn json_round_trips() {
        let dataset = get_test_dataset();
        let mut out = Vec::new();
        write_json(&dataset, &mut out).unwrap();
        let reloaded = load_json_reader(out.as_slice()).unwrap();
        assert_eq!(dataset, reloaded);
    }
}
