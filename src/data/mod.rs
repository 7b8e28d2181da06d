/// Data layer: core types, loading, filtering, ranking and export.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, check columns → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<CompanyRecord>, columns in load order
///   └──────────┘
///        │
///        ├──────────────┬──────────────┐
///        ▼              ▼              ▼
///   ┌──────────┐   ┌──────────┐   ┌──────────┐
///   │  filter   │   │ ranking  │   │  export  │
///   └──────────┘   └──────────┘   └──────────┘
///   criteria →      top-N, lookup,  CSV / JSON
///   derived Dataset related
/// ```

pub mod export;
pub mod filter;
pub mod loader;
pub mod model;
pub mod ranking;
