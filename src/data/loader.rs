use std::io::Read;
use std::path::{Path, PathBuf};

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::{Map, Value as JsonValue};

use super::model::{Column, CompanyRecord, Dataset};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Anything that can produce a complete [`Dataset`].
pub trait DatasetSource {
    fn load(&self) -> Result<Dataset>;
}

/// A dataset file on disk, loaded with [`load_file`].
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileSource {
    fn load(&self) -> Result<Dataset> {
        load_file(&self.path)
    }
}

/// Load a company dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row naming the columns (the scraped export format)
/// * `.json`    – `[{ "company_name": ..., "industry": ..., ... }, ...]`
/// * `.parquet` – one column per field; numeric columns of any numeric type
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => Err(Error::UnsupportedFormat {
            extension: other.to_string(),
        }),
    }?;
    log::info!(
        "loaded {} companies from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// Resolve source column names into known columns, in source order.
///
/// Unknown names are ignored. Fails on the first required column missing.
fn resolve_columns<'a, I>(names: I) -> Result<Vec<Column>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut columns = Vec::new();
    for name in names {
        match Column::from_name(name) {
            Some(column) if !columns.contains(&column) => columns.push(column),
            Some(_) => {}
            None => log::debug!("ignoring column {name}"),
        }
    }
    if let Some(missing) = Column::ALL
        .into_iter()
        .find(|c| c.is_required() && !columns.contains(c))
    {
        return Err(Error::MissingColumn {
            column: missing.name(),
        });
    }
    Ok(columns)
}

fn check_name(record: &CompanyRecord, row: usize) -> Result<()> {
    if record.company_name.is_empty() {
        return Err(Error::malformed(row, "company_name is empty"));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, one company per row.
/// Empty cells are null. Columns other than the seven known ones are ignored.
pub fn load_csv(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)?;
    load_csv_reader(file)
}

/// Load CSV data from any reader.
pub fn load_csv_reader<R: Read>(rdr: R) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(rdr);
    let columns = resolve_columns(reader.headers()?.iter())?;

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<CompanyRecord>().enumerate() {
        let record = result?;
        check_name(&record, row_no)?;
        records.push(record);
    }

    Ok(Dataset::with_columns(records, columns))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, as served by the companies API):
///
/// ```json
/// [
///   {
///     "company_name": "Acme",
///     "industry": "IT Services",
///     "location": "Pune",
///     "size": "201-500",
///     "type": "Private",
///     "company_rating": 4.1,
///     "years_old": 12
///   },
///   ...
/// ]
/// ```
pub fn load_json(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)?;
    load_json_reader(std::io::BufReader::new(file))
}

/// Load JSON records from any reader.
///
/// Column order follows the keys of the first object. A `years_old` key that
/// only shows up in later objects is appended at the end.
pub fn load_json_reader<R: Read>(rdr: R) -> Result<Dataset> {
    let rows: Vec<Map<String, JsonValue>> = serde_json::from_reader(rdr)?;

    let mut columns: Option<Vec<Column>> = None;
    let mut records = Vec::with_capacity(rows.len());
    for (row_no, row) in rows.into_iter().enumerate() {
        let seen = columns.get_or_insert_with(Vec::new);
        for column in resolve_columns(row.keys().map(String::as_str))? {
            if !seen.contains(&column) {
                seen.push(column);
            }
        }

        let record: CompanyRecord = serde_json::from_value(JsonValue::Object(row))
            .map_err(|e| Error::malformed(row_no, e.to_string()))?;
        check_name(&record, row_no)?;
        records.push(record);
    }

    let columns = columns.unwrap_or_else(|| {
        Column::ALL
            .into_iter()
            .filter(|c| c.is_required())
            .collect()
    });
    Ok(Dataset::with_columns(records, columns))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file containing company data.
///
/// Expected schema:
/// - `company_name`, `industry`, `location`, `size`, `type`: Utf8 / LargeUtf8
/// - `company_rating`, `years_old`: any type castable to Float64
/// - Any other columns are ignored
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
pub fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path)?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let columns = resolve_columns(
        builder
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().as_str()),
    )?;
    let reader = builder.build()?;

    let mut records = Vec::new();
    for batch_result in reader {
        let batch = batch_result?;
        let offset = records.len();
        read_batch(&batch, &columns, offset, &mut records)?;
    }

    Ok(Dataset::with_columns(records, columns))
}

// -- Parquet / Arrow helpers --

/// A batch column cast to the type the record field needs.
enum Cells {
    Text(ArrayRef),
    Number(ArrayRef),
    Absent,
}

impl Cells {
    fn new(batch: &RecordBatch, column: Column, present: &[Column]) -> Result<Self> {
        if !present.contains(&column) {
            return Ok(Cells::Absent);
        }
        let Some(array) = batch.column_by_name(column.name()) else {
            return Ok(Cells::Absent);
        };
        let cells = match column {
            Column::CompanyRating | Column::YearsOld => {
                Cells::Number(cast(array, &DataType::Float64)?)
            }
            _ => Cells::Text(cast(array, &DataType::Utf8)?),
        };
        Ok(cells)
    }

    fn text(&self, row: usize) -> Option<String> {
        match self {
            Cells::Text(array) if !array.is_null(row) => {
                Some(array.as_string::<i32>().value(row).to_string())
            }
            _ => None,
        }
    }

    fn number(&self, row: usize) -> Option<f64> {
        match self {
            Cells::Number(array) if !array.is_null(row) => {
                Some(array.as_primitive::<Float64Type>().value(row))
            }
            _ => None,
        }
    }
}

fn read_batch(
    batch: &RecordBatch,
    columns: &[Column],
    offset: usize,
    records: &mut Vec<CompanyRecord>,
) -> Result<()> {
    let cells = |column| Cells::new(batch, column, columns);
    let name = cells(Column::CompanyName)?;
    let industry = cells(Column::Industry)?;
    let location = cells(Column::Location)?;
    let size = cells(Column::Size)?;
    let company_type = cells(Column::Type)?;
    let rating = cells(Column::CompanyRating)?;
    let years_old = cells(Column::YearsOld)?;

    for row in 0..batch.num_rows() {
        let record = CompanyRecord {
            company_name: name
                .text(row)
                .ok_or_else(|| Error::malformed(offset + row, "company_name is null"))?,
            industry: industry.text(row),
            location: location.text(row),
            size: size.text(row),
            company_type: company_type.text(row),
            company_rating: rating.number(row),
            years_old: years_old.number(row),
        };
        check_name(&record, offset + row)?;
        records.push(record);
    }
    Ok(())
}
