//! Error handling.

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Company dataset error type
///
/// Each variant belongs to one [ErrorKind], which is what callers are expected to branch on.
#[derive(Debug, Error)]
pub enum Error {
    /// Error reading the backing store
    #[error("failed to read dataset")]
    Io(#[from] std::io::Error),

    /// Error parsing CSV data
    #[error("failed to parse CSV dataset")]
    Csv(#[from] csv::Error),

    /// Error parsing or writing JSON data
    #[error("failed to parse JSON dataset")]
    Json(#[from] serde_json::Error),

    /// Error reading a Parquet file
    #[error("failed to read Parquet dataset")]
    Parquet(#[from] ParquetError),

    /// Error converting Arrow column data
    #[error("failed to convert Arrow column data")]
    Arrow(#[from] ArrowError),

    /// The file extension does not map to a known loader
    #[error("unsupported dataset format .{extension}")]
    UnsupportedFormat { extension: String },

    /// A row could not be turned into a company record
    #[error("row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },

    /// A required column is absent from the loaded data
    #[error("dataset is missing required column {column}")]
    MissingColumn { column: &'static str },

    /// Lookup by name found no match
    #[error("company {name} not found")]
    CompanyNotFound { name: String },
}

/// Coarse classification of an [Error].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The dataset could not be loaded or is malformed.
    DataUnavailable,
    /// The dataset loaded but lacks required columns.
    Schema,
    /// A lookup found nothing.
    NotFound,
}

impl Error {
    /// Return the [ErrorKind] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_)
            | Error::Csv(_)
            | Error::Json(_)
            | Error::Parquet(_)
            | Error::Arrow(_)
            | Error::UnsupportedFormat { extension: _ }
            | Error::MalformedRow { row: _, reason: _ } => ErrorKind::DataUnavailable,

            Error::MissingColumn { column: _ } => ErrorKind::Schema,

            Error::CompanyNotFound { name: _ } => ErrorKind::NotFound,
        }
    }

    pub(crate) fn malformed(row: usize, reason: impl Into<String>) -> Self {
        Error::MalformedRow {
            row,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_is_data_unavailable() {
        let error = Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        assert_eq!(ErrorKind::DataUnavailable, error.kind());
        assert_eq!("failed to read dataset", error.to_string());
    }

    #[test]
    fn malformed_row_message() {
        let error = Error::malformed(3, "company_name is empty");
        assert_eq!(ErrorKind::DataUnavailable, error.kind());
        assert_eq!("row 3: company_name is empty", error.to_string());
    }

    #[test]
    fn missing_column_is_schema() {
        let error = Error::MissingColumn {
            column: "industry",
        };
        assert_eq!(ErrorKind::Schema, error.kind());
        assert_eq!(
            "dataset is missing required column industry",
            error.to_string()
        );
    }

    #[test]
    fn company_not_found_is_not_found() {
        let error = Error::CompanyNotFound {
            name: "Acme".to_string(),
        };
        assert_eq!(ErrorKind::NotFound, error.kind());
        assert_eq!("company Acme not found", error.to_string());
    }

    #[test]
    fn unsupported_format_message() {
        let error = Error::UnsupportedFormat {
            extension: "xlsx".to_string(),
        };
        assert_eq!(ErrorKind::DataUnavailable, error.kind());
        assert_eq!("unsupported dataset format .xlsx", error.to_string());
    }
}
