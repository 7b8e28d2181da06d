use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Column – the fixed set of named columns
// ---------------------------------------------------------------------------

/// A named column of the company dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    CompanyName,
    Industry,
    Location,
    Size,
    Type,
    CompanyRating,
    YearsOld,
}

impl Column {
    /// All columns in canonical order.
    pub const ALL: [Column; 7] = [
        Column::CompanyName,
        Column::Industry,
        Column::Location,
        Column::Size,
        Column::Type,
        Column::CompanyRating,
        Column::YearsOld,
    ];

    /// Name of the column in source files.
    pub fn name(self) -> &'static str {
        match self {
            Column::CompanyName => "company_name",
            Column::Industry => "industry",
            Column::Location => "location",
            Column::Size => "size",
            Column::Type => "type",
            Column::CompanyRating => "company_rating",
            Column::YearsOld => "years_old",
        }
    }

    /// Look up a column by its source name.
    pub fn from_name(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Whether a dataset must carry this column to be loaded.
    /// Only `years_old` may be absent.
    pub fn is_required(self) -> bool {
        self != Column::YearsOld
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The string-valued columns, usable for distinct-value lists and equality filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColumn {
    CompanyName,
    Industry,
    Location,
    Size,
    Type,
}

impl From<TextColumn> for Column {
    fn from(column: TextColumn) -> Self {
        match column {
            TextColumn::CompanyName => Column::CompanyName,
            TextColumn::Industry => Column::Industry,
            TextColumn::Location => Column::Location,
            TextColumn::Size => Column::Size,
            TextColumn::Type => Column::Type,
        }
    }
}

// ---------------------------------------------------------------------------
// CompanyRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single company (one row of the source table).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub company_name: String,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub size: Option<String>,
    #[serde(rename = "type")]
    pub company_type: Option<String>,
    pub company_rating: Option<f64>,
    #[serde(default)]
    pub years_old: Option<f64>,
}

impl CompanyRecord {
    /// A record with only a name; every other attribute is null.
    pub fn named(name: impl Into<String>) -> Self {
        CompanyRecord {
            company_name: name.into(),
            industry: None,
            location: None,
            size: None,
            company_type: None,
            company_rating: None,
            years_old: None,
        }
    }

    /// Value of a text column.
    pub fn text(&self, column: TextColumn) -> Option<&str> {
        match column {
            TextColumn::CompanyName => Some(&self.company_name),
            TextColumn::Industry => self.industry.as_deref(),
            TextColumn::Location => self.location.as_deref(),
            TextColumn::Size => self.size.as_deref(),
            TextColumn::Type => self.company_type.as_deref(),
        }
    }

    /// NaN is how the source tables spell null for numeric columns.
    /// Infinities carry no usable value either and are nulled the same way.
    pub(crate) fn normalise(mut self) -> Self {
        self.company_rating = self.company_rating.filter(|v| v.is_finite());
        self.years_old = self.years_old.filter(|v| v.is_finite());
        self
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// An immutable, ordered collection of company records.
///
/// `columns` lists the columns present in the source, in load order. Every
/// required column is always present; `years_old` may be missing.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<CompanyRecord>,
    columns: Vec<Column>,
}

impl Dataset {
    /// Build a dataset carrying all seven columns in canonical order.
    ///
    /// Non-finite ratings and ages are stored as null.
    pub fn from_records(records: Vec<CompanyRecord>) -> Self {
        Dataset {
            records: records.into_iter().map(CompanyRecord::normalise).collect(),
            columns: Column::ALL.to_vec(),
        }
    }

    /// Build a dataset with an explicit column list, as read from a source.
    ///
    /// Values of columns that are not listed are cleared so the record set
    /// agrees with the column set. Non-finite numbers become null.
    pub(crate) fn with_columns(records: Vec<CompanyRecord>, columns: Vec<Column>) -> Self {
        let keep_age = columns.contains(&Column::YearsOld);
        let records = records
            .into_iter()
            .map(|r| {
                let r = r.normalise();
                if keep_age {
                    r
                } else {
                    CompanyRecord {
                        years_old: None,
                        ..r
                    }
                }
            })
            .collect();
        Dataset { records, columns }
    }

    /// Derive a new dataset over the same columns.
    pub(crate) fn derive(&self, records: Vec<CompanyRecord>) -> Self {
        Dataset {
            records,
            columns: self.columns.clone(),
        }
    }

    /// All records in dataset order.
    pub fn records(&self) -> &[CompanyRecord] {
        &self.records
    }

    /// Columns present, in load order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains(&column)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CompanyRecord> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CompanyRecord;
    type IntoIter = std::slice::Iter<'a, CompanyRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
