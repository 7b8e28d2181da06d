//! This file defines the company-lens binary entry point.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;

use company_lens::analytics::AnalyticsReport;
use company_lens::cli::{self, CommandLineArgs, Command};
use company_lens::data::export::{write_csv, write_json, CSV_FILE_NAME};
use company_lens::data::filter::{filter, FilterCriteria, FilterOptions};
use company_lens::data::loader::FileSource;
use company_lens::data::model::CompanyRecord;
use company_lens::data::ranking::{find_company, related_companies, top_by_rating};
use company_lens::state::DatasetStore;
use company_lens::ErrorKind;

#[derive(Serialize)]
struct CompanyDetail {
    company: CompanyRecord,
    related_companies: Vec<CompanyRecord>,
}

fn print_json<T: Serialize>(args: &CommandLineArgs, value: &T) -> Result<()> {
    let stdout = std::io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(stdout, value)?;
    } else {
        serde_json::to_writer(stdout, value)?;
    }
    println!();
    Ok(())
}

fn run(args: &CommandLineArgs) -> Result<()> {
    let source = FileSource::new(&args.data);
    let store = DatasetStore::open(&source)
        .with_context(|| format!("loading dataset from {}", source.path().display()))?;
    let dataset = store.snapshot();

    match &args.command {
        Command::Options => print_json(args, &FilterOptions::from_dataset(&dataset)),
        Command::Top { count } => print_json(args, &top_by_rating(&dataset, *count)),
        Command::Company { name, related } => {
            let company = match find_company(&dataset, name) {
                Ok(company) => company,
                Err(error) if error.kind() == ErrorKind::NotFound => {
                    anyhow::bail!("Company not found: {name}")
                }
                Err(error) => return Err(error.into()),
            };
            let related_companies = related_companies(&dataset, &company, *related);
            print_json(
                args,
                &CompanyDetail {
                    company,
                    related_companies,
                },
            )
        }
        Command::Search { filters, csv, save } => {
            let criteria = FilterCriteria::from(filters.clone());
            let filtered = filter(&dataset, &criteria);
            log::debug!("{} of {} companies match", filtered.len(), dataset.len());
            if *save {
                let file = std::fs::File::create(CSV_FILE_NAME)
                    .with_context(|| format!("creating {CSV_FILE_NAME}"))?;
                write_csv(&filtered, file)?;
                log::info!("wrote {} companies to {CSV_FILE_NAME}", filtered.len());
                return Ok(());
            }
            let mut stdout = std::io::stdout().lock();
            if *csv {
                write_csv(&filtered, &mut stdout)?;
            } else {
                write_json(&filtered, &mut stdout)?;
                writeln!(stdout)?;
            }
            Ok(())
        }
        Command::Analytics { filters, bins } => {
            let criteria = FilterCriteria::from(filters.clone());
            print_json(args, &AnalyticsReport::build(&dataset, &criteria, *bins))
        }
        Command::Dump => {
            let mut stdout = std::io::stdout().lock();
            write_json(&dataset, &mut stdout)?;
            writeln!(stdout)?;
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = cli::parse();
    log::debug!("{:?}", args);
    run(&args)
}
