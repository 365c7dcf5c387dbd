/// Data layer: core types, ingestion, export and sidecars.
///
/// Architecture:
/// ```text
///  instrument .txt (";" delimited, decimal comma or period)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  infer width + header rows → SpectralDataset
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ SpectralDataset │  (x, y) Series with column names
///   └────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  export   │  name/unit header lines + "x;y" rows
///   └──────────┘
/// ```

pub mod export;
pub mod loader;
pub mod model;
pub mod sidecar;
