use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

use company_lens::data::export::write_csv;
use company_lens::data::model::{CompanyRecord, Dataset};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[(self.next_u64() % items.len() as u64) as usize]
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const INDUSTRIES: [&str; 6] = [
    "IT Services & Consulting",
    "Internet",
    "Banking",
    "Pharma",
    "Retail",
    "Education & Training",
];
const LOCATIONS: [&str; 6] = ["Bangalore", "Mumbai", "Pune", "Chennai", "Hyderabad", "Gurgaon"];
const SIZES: [&str; 5] = ["1-10", "11-50", "51-200", "1001-5000", "10000+"];
const TYPES: [&str; 4] = ["Private", "Public", "MNC", "Startup"];
const SYLLABLES: [&str; 10] = [
    "Infra", "Tech", "Nova", "Bharat", "Soft", "Zen", "Quant", "Vista", "Lab", "Works",
];

fn generate(rng: &mut SimpleRng, count: usize) -> Vec<CompanyRecord> {
    (0..count)
        .map(|i| {
            let name = format!("{}{} {}", rng.pick(&SYLLABLES), rng.pick(&SYLLABLES), i);
            // A few rows carry the null and out-of-range values the scraped data has.
            let rating = (rng.next_f64() > 0.03)
                .then(|| (rng.gauss(3.8, 0.45).clamp(1.0, 5.0) * 10.0).round() / 10.0);
            let years_old = match rng.next_u64() % 40 {
                0 => None,
                1 => Some(-1.0),
                2 => Some(2024.0),
                _ => Some((rng.next_f64() * 80.0).round() + 1.0),
            };
            CompanyRecord {
                company_name: name,
                industry: Some(rng.pick(&INDUSTRIES).to_string()),
                location: Some(rng.pick(&LOCATIONS).to_string()),
                size: (rng.next_u64() % 25 != 0).then(|| rng.pick(&SIZES).to_string()),
                company_type: Some(rng.pick(&TYPES).to_string()),
                company_rating: rating,
                years_old,
            }
        })
        .collect()
}

fn write_parquet(records: &[CompanyRecord], path: &Path) -> Result<()> {
    let text = |f: fn(&CompanyRecord) -> Option<&str>| -> ArrayRef {
        Arc::new(records.iter().map(f).collect::<StringArray>())
    };
    let number = |f: fn(&CompanyRecord) -> Option<f64>| -> ArrayRef {
        Arc::new(records.iter().map(f).collect::<Float64Array>())
    };

    let schema = Arc::new(Schema::new(vec![
        Field::new("company_name", DataType::Utf8, false),
        Field::new("industry", DataType::Utf8, true),
        Field::new("location", DataType::Utf8, true),
        Field::new("size", DataType::Utf8, true),
        Field::new("type", DataType::Utf8, true),
        Field::new("company_rating", DataType::Float64, true),
        Field::new("years_old", DataType::Float64, true),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            text(|r| Some(r.company_name.as_str())),
            text(|r| r.industry.as_deref()),
            text(|r| r.location.as_deref()),
            text(|r| r.size.as_deref()),
            text(|r| r.company_type.as_deref()),
            number(|r| r.company_rating),
            number(|r| r.years_old),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).context("creating parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("invalid company count {arg:?}"))?,
        None => 500,
    };

    let mut rng = SimpleRng::new(42);
    let records = generate(&mut rng, count);

    let parquet_path = Path::new("sample_companies.parquet");
    write_parquet(&records, parquet_path)?;

    let csv_path = Path::new("sample_companies.csv");
    let file = std::fs::File::create(csv_path).context("creating CSV file")?;
    write_csv(&Dataset::from_records(records), file).context("writing CSV")?;

    println!(
        "Wrote {count} companies to {} and {}",
        parquet_path.display(),
        csv_path.display()
    );
    Ok(())
}
