//! Browsing and rating analytics over a company-review dataset.
//!
//! A [`Dataset`](data::model::Dataset) is loaded once by a
//! [`DatasetSource`](data::loader::DatasetSource), narrowed with
//! [`filter`](data::filter::filter), and summarised by the functions in
//! [`analytics`]. Nothing in the filter, ranking or analytics modules performs
//! I/O: every call receives the dataset snapshot it works on.

pub mod analytics;
pub mod cli;
pub mod data;
pub mod error;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, ErrorKind, Result};
