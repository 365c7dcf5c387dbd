use std::path::Path;

use crate::config::IngestConfig;
use crate::error::{Error, Result};

use super::model::{ColumnName, Series, SpectralDataset};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a spectral dataset from a delimited text export.
pub fn load_file(path: &Path, cfg: &IngestConfig) -> Result<SpectralDataset> {
    let text = std::fs::read_to_string(path).map_err(|e| Error::io("reading", path, e))?;
    let dataset = parse_str(&text, cfg)?;
    log::info!(
        "Loaded {} samples from {} ({} / {})",
        dataset.len(),
        path.display(),
        dataset.x.name,
        dataset.y.name
    );
    Ok(dataset)
}

/// Parse the text of an instrument export.
///
/// The header shape is not known up front:
/// * the table width is the most common number of cells per line,
/// * lines of any other width are dropped,
/// * rows before the first all-numeric row are header rows whose cells are
///   joined per column into the column names.
///
/// Decimal commas are accepted. A file whose lines mostly hold a single cell
/// is read as a dense dump instead (see [`IngestConfig::dense_header_rows`]).
pub fn parse_str(text: &str, cfg: &IngestConfig) -> Result<SpectralDataset> {
    let rows = split_rows(text, cfg.delimiter)?;
    if rows.is_empty() {
        return Err(Error::Empty);
    }

    let width = modal_width(&rows);
    if width == 1 {
        return parse_dense(text, cfg.dense_header_rows);
    }

    let total = rows.len();
    let table: Vec<Row> = rows
        .into_iter()
        .filter(|row| row.cells.len() == width)
        .map(Row::normalized)
        .collect();
    if table.len() < total {
        log::debug!("Dropped {} lines not {width} cells wide", total - table.len());
    }

    let start = table
        .iter()
        .position(|row| row.cells.iter().all(|c| is_number(c)))
        .ok_or(Error::NoNumericData)?;
    log::debug!("{start} header rows, table width {width}");

    let names = merge_headers(&table[..start], width);
    let x_col = cfg.columns.x.resolve(width)?;
    let y_col = cfg.columns.y.resolve(width)?;

    let mut x = Vec::with_capacity(table.len() - start);
    let mut y = Vec::with_capacity(table.len() - start);
    for row in &table[start..] {
        let values = row.parse()?;
        x.push(values[x_col]);
        y.push(values[y_col]);
    }

    Ok(SpectralDataset::new(
        Series::new(names[x_col].clone(), x),
        Series::new(names[y_col].clone(), y),
    ))
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

struct Row {
    /// 1-based source line.
    line: usize,
    cells: Vec<String>,
}

impl Row {
    fn normalized(mut self) -> Self {
        for cell in &mut self.cells {
            *cell = cell.trim().replace(',', ".");
        }
        self
    }

    fn parse(&self) -> Result<Vec<f64>> {
        self.cells
            .iter()
            .map(|cell| {
                cell.parse::<f64>().map_err(|_| Error::MalformedCell {
                    line: self.line,
                    cell: cell.clone(),
                })
            })
            .collect()
    }
}

fn split_rows(text: &str, delimiter: char) -> Result<Vec<Row>> {
    if !delimiter.is_ascii() {
        return Err(Error::InvalidDelimiter(delimiter));
    }
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 1);
        rows.push(Row {
            line,
            cells: record.iter().map(str::to_string).collect(),
        });
    }
    Ok(rows)
}

/// Most frequent row width; ties go to the width seen first.
fn modal_width(rows: &[Row]) -> usize {
    let mut counts: Vec<(usize, usize)> = Vec::new();
    for row in rows {
        let width = row.cells.len();
        match counts.iter_mut().find(|(w, _)| *w == width) {
            Some((_, n)) => *n += 1,
            None => counts.push((width, 1)),
        }
    }
    let mut best = (0, 0);
    for &(width, n) in &counts {
        if n > best.1 {
            best = (width, n);
        }
    }
    best.0
}

fn is_number(cell: &str) -> bool {
    cell.parse::<f64>().is_ok()
}

/// Space-join the non-empty header cells of each column.
fn merge_headers(header_rows: &[Row], width: usize) -> Vec<ColumnName> {
    (0..width)
        .map(|col| {
            let joined = header_rows
                .iter()
                .map(|row| row.cells[col].as_str())
                .filter(|cell| !cell.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            if joined.is_empty() {
                ColumnName::placeholder(col)
            } else {
                ColumnName::new(joined)
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Dense single-column dumps
// ---------------------------------------------------------------------------

/// A fixed-size header followed by one value per line. The independent
/// variable is the row index.
fn parse_dense(text: &str, header_rows: usize) -> Result<SpectralDataset> {
    let mut values = Vec::new();
    for (i, raw) in text.lines().enumerate().skip(header_rows) {
        let cell = raw.trim().replace(',', ".");
        if cell.is_empty() {
            continue;
        }
        let value = cell.parse::<f64>().map_err(|_| Error::MalformedCell {
            line: i + 1,
            cell: cell.clone(),
        })?;
        values.push(value);
    }
    if values.is_empty() {
        return Err(Error::NoNumericData);
    }

    let index = (0..values.len()).map(|i| i as f64).collect();
    Ok(SpectralDataset::new(
        Series::new(ColumnName::new("Index"), index),
        Series::new(ColumnName::new("Intensity"), values),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<Row> {
        split_rows(&lines.join("\n"), ';').unwrap()
    }

    #[test]
    fn modal_width_prefers_first_seen_on_tie() {
        let r = rows(&["a;b;c", "1;2", "3;4;5", "6;7"]);
        assert_eq!(modal_width(&r), 3);
    }

    #[test]
    fn headers_skip_empty_cells() {
        let r: Vec<Row> = rows(&["Wavelength;;R", "nm;x;%"])
            .into_iter()
            .map(Row::normalized)
            .collect();
        let names = merge_headers(&r, 3);
        assert_eq!(names[0].as_str(), "Wavelength nm");
        assert_eq!(names[1].as_str(), "x");
        assert_eq!(names[2].as_str(), "R %");
    }

    #[test]
    fn missing_header_gets_placeholder() {
        let names = merge_headers(&[], 2);
        assert_eq!(names[1].as_str(), "column1");
    }

    #[test]
    fn number_detection_accepts_exponents() {
        assert!(is_number("1.5e-3"));
        assert!(is_number("-7"));
        assert!(!is_number(""));
        assert!(!is_number("nm"));
    }
}
