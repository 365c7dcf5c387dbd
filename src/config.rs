use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "SMOOTHSPECTRA_CONFIG";

// ---------------------------------------------------------------------------
// Column selection
// ---------------------------------------------------------------------------

/// Picks one column of the numeric table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnIndex {
    First,
    Last,
    At(usize),
}

impl ColumnIndex {
    /// Resolve against a table of `width` columns.
    pub fn resolve(self, width: usize) -> Result<usize> {
        let index = match self {
            ColumnIndex::First => 0,
            ColumnIndex::Last => width.saturating_sub(1),
            ColumnIndex::At(i) => i,
        };
        if index >= width {
            return Err(Error::ColumnOutOfRange { index, width });
        }
        Ok(index)
    }
}

/// Which columns hold the independent (`x`) and dependent (`y`) variable.
///
/// Instrument exports put the wavelength first and the measured value last,
/// which is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSelector {
    pub x: ColumnIndex,
    pub y: ColumnIndex,
}

impl Default for ColumnSelector {
    fn default() -> Self {
        Self {
            x: ColumnIndex::First,
            y: ColumnIndex::Last,
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    pub delimiter: char,
    /// Header lines skipped in single-column dumps.
    pub dense_header_rows: usize,
    pub columns: ColumnSelector,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            dense_header_rows: 7,
            columns: ColumnSelector::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Initial window offered in the UI.
    pub window: usize,
    pub polyorder: usize,
    pub min_window: usize,
    pub max_window: usize,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window: 50,
            polyorder: 2,
            min_window: 3,
            max_window: 500,
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ingest: IngestConfig,
    pub smoothing: SmoothingConfig,
    pub snap_to_maxima: bool,
    /// Decimals written per value in exported curves.
    pub export_precision: usize,
    /// Decimals shown for the reflectance value.
    pub display_precision: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ingest: IngestConfig::default(),
            smoothing: SmoothingConfig::default(),
            snap_to_maxima: false,
            export_precision: 6,
            display_precision: 4,
        }
    }
}

impl Config {
    /// Read a JSON config file. Absent fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| Error::io("reading config", path, e))?;
        serde_json::from_str(&text).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `$SMOOTHSPECTRA_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                let path = Path::new(&path);
                log::info!("Loading config from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: Config =
            serde_json::from_str(r#"{ "smoothing": { "window": 11 }, "snap_to_maxima": true }"#)
                .unwrap();
        assert_eq!(cfg.smoothing.window, 11);
        assert_eq!(cfg.smoothing.polyorder, 2);
        assert!(cfg.snap_to_maxima);
        assert_eq!(cfg.ingest, IngestConfig::default());
    }

    #[test]
    fn selector_parses_from_json() {
        let cfg: IngestConfig =
            serde_json::from_str(r#"{ "columns": { "x": "first", "y": { "at": 1 } } }"#).unwrap();
        assert_eq!(cfg.columns.y, ColumnIndex::At(1));
        assert_eq!(cfg.delimiter, ';');
    }

    #[test]
    fn resolve_rejects_out_of_range() {
        assert_eq!(ColumnIndex::Last.resolve(4).unwrap(), 3);
        assert!(matches!(
            ColumnIndex::At(4).resolve(4),
            Err(Error::ColumnOutOfRange { index: 4, width: 4 })
        ));
    }
}
