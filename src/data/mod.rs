/// Data layer: survey records, loading, projection and export.
///
/// Architecture:
/// ```text
///  ges.csv
///     │
///     ▼
///   ┌──────────┐
///   │  loader  │  parse CSV → Dataset (headers + rows)
///   └──────────┘
///     │
///     ├──────────────► years   first/last row → YearSpan, tab ↔ year
///     ▼
///   ┌──────────────┐
///   │ filter, sort │  (Dataset, selection) → projected row indices
///   └──────────────┘
///     │
///     ├──────────────► view    projection ∩ active year, numbered 1..
///     ▼
///   ┌──────────┐
///   │  export  │  whole projection → CSV bytes
///   └──────────┘
/// ```

pub mod export;
pub mod filter;
pub mod institution;
pub mod loader;
pub mod model;
pub mod sort;
pub mod view;
pub mod years;
