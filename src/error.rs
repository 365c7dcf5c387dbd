use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Library error type
// ---------------------------------------------------------------------------

/// Everything the ingestion, engine and export layers can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{action} {path}: {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("input contains no lines")]
    Empty,

    #[error("no row in which every cell is numeric")]
    NoNumericData,

    #[error("line {line}: '{cell}' is not a number")]
    MalformedCell { line: usize, cell: String },

    #[error("column {index} is outside a table of width {width}")]
    ColumnOutOfRange { index: usize, width: usize },

    #[error("background and signal are sampled differently ({reason})")]
    SamplingMismatch { reason: String },

    #[error("invalid smoothing window {window}: {reason}")]
    InvalidWindow { window: usize, reason: String },

    #[error("cannot fit a line through two points with the same x ({x})")]
    DegenerateLine { x: f64 },

    #[error("sample {index} is outside a curve of {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no numeric gap between samples {from} and {to}")]
    NoFiniteGap { from: usize, to: usize },

    #[error("{0} is required first")]
    Missing(&'static str),

    #[error("malformed curve file: {0}")]
    MalformedCurve(String),

    #[error("parsing JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("delimiter {0:?} is not a single-byte character")]
    InvalidDelimiter(char),

    #[error("delimited text: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
