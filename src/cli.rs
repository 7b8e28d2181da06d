//! Command Line Interface (CLI) arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::analytics::{DEFAULT_BIN_COUNT, DEFAULT_TOP_NAMES};
use crate::data::filter::FilterCriteria;
use crate::data::ranking::DEFAULT_RELATED;

/// company-lens command line interface
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct CommandLineArgs {
    /// Path to the company dataset (.csv, .json or .parquet)
    #[arg(
        long,
        default_value = "data/all_cities_data.csv",
        env = "COMPANY_LENS_DATA"
    )]
    pub data: PathBuf,
    /// Pretty-print JSON output
    #[arg(long, default_value_t = false, env = "COMPANY_LENS_PRETTY")]
    pub pretty: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Distinct industries, locations, sizes and types for filter dropdowns
    Options,
    /// Best rated companies
    Top {
        /// Number of companies to list
        #[arg(long, default_value_t = DEFAULT_TOP_NAMES)]
        count: usize,
    },
    /// One company with related companies from the same industry
    Company {
        /// Exact company name
        name: String,
        /// Number of related companies to list
        #[arg(long, default_value_t = DEFAULT_RELATED)]
        related: usize,
    },
    /// Companies matching the filters
    Search {
        #[command(flatten)]
        filters: FilterArgs,
        /// Write CSV instead of JSON
        #[arg(long, default_value_t = false)]
        csv: bool,
        /// Save the result as CSV to filtered_companies.csv instead of printing it
        #[arg(long, default_value_t = false)]
        save: bool,
    },
    /// Rating and age analytics over the companies matching the filters
    Analytics {
        #[command(flatten)]
        filters: FilterArgs,
        /// Number of histogram bins
        #[arg(long, default_value_t = DEFAULT_BIN_COUNT, env = "COMPANY_LENS_BINS")]
        bins: usize,
    },
    /// The whole dataset as JSON records
    Dump,
}

/// Filter flags shared by `search` and `analytics`.
#[derive(Clone, Debug, Default, Args)]
pub struct FilterArgs {
    /// Case-insensitive substring of the company name
    #[arg(long, short = 'q')]
    pub query: Option<String>,
    #[arg(long)]
    pub industry: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    #[arg(long)]
    pub size: Option<String>,
    /// Ownership type
    #[arg(long = "type")]
    pub company_type: Option<String>,
    /// Minimum company rating; 0 means no minimum
    #[arg(long)]
    pub min_rating: Option<f64>,
}

impl From<FilterArgs> for FilterCriteria {
    fn from(args: FilterArgs) -> Self {
        FilterCriteria {
            text_query: args.query,
            industry: args.industry,
            location: args.location,
            size: args.size,
            company_type: args.company_type,
            min_rating: args.min_rating,
        }
    }
}

/// Returns parsed command line arguments.
pub fn parse() -> CommandLineArgs {
    CommandLineArgs::parse()
}
