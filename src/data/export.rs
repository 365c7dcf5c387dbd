use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Error, Result};

use super::model::{ColumnName, Series, SpectralDataset};

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Write a curve as two header lines (quantities, units) followed by
/// `x;y` rows with `precision` decimals.
///
/// ```text
/// Wavelength   ;Reflectance
/// nm   ;%
/// 400.000000;0.125000
/// ```
pub fn write_curve<W, I>(
    out: W,
    x_name: &ColumnName,
    y_name: &ColumnName,
    points: I,
    precision: usize,
) -> Result<usize>
where
    W: Write,
    I: IntoIterator<Item = (f64, f64)>,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(out);

    let (xq, xu) = x_name.split();
    let (yq, yu) = y_name.split();
    writer.write_record([format!("{xq}   "), yq.to_string()])?;
    writer.write_record([format!("{xu}   "), yu.to_string()])?;

    let mut rows = 0;
    for (x, y) in points {
        writer.write_record([format!("{x:.precision$}"), format!("{y:.precision$}")])?;
        rows += 1;
    }
    writer
        .flush()
        .map_err(|e| Error::Csv(csv::Error::from(e)))?;
    Ok(rows)
}

/// Create or overwrite `path` with a curve.
pub fn save_curve<I>(
    path: &Path,
    x_name: &ColumnName,
    y_name: &ColumnName,
    points: I,
    precision: usize,
) -> Result<()>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let file = std::fs::File::create(path).map_err(|e| Error::io("creating", path, e))?;
    let rows = write_curve(std::io::BufWriter::new(file), x_name, y_name, points, precision)?;
    log::info!("Saved {rows} rows to {}", path.display());
    Ok(())
}

/// Save a whole dataset, independent variable first.
pub fn save_dataset(path: &Path, dataset: &SpectralDataset, precision: usize) -> Result<()> {
    save_curve(
        path,
        &dataset.x.name,
        &dataset.y.name,
        dataset.points().map(|[x, y]| (x, y)),
        precision,
    )
}

// ---------------------------------------------------------------------------
// Reading back
// ---------------------------------------------------------------------------

/// Read a file produced by [`write_curve`].
pub fn read_curve<R: Read>(input: R) -> Result<SpectralDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut records = reader.records();
    let mut header = || -> Result<(String, String)> {
        let record = records
            .next()
            .ok_or_else(|| Error::MalformedCurve("missing header line".into()))??;
        match (record.get(0), record.get(1)) {
            (Some(a), Some(b)) => Ok((a.trim().to_string(), b.trim().to_string())),
            _ => Err(Error::MalformedCurve("header line needs two cells".into())),
        }
    };
    let (xq, yq) = header()?;
    let (xu, yu) = header()?;

    let mut x = Vec::new();
    let mut y = Vec::new();
    for record in records {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let cell = |i: usize| -> Result<f64> {
            let text = record.get(i).unwrap_or("").trim();
            text.parse().map_err(|_| {
                Error::MalformedCurve(format!("line {line}: '{text}' is not a number"))
            })
        };
        x.push(cell(0)?);
        y.push(cell(1)?);
    }

    Ok(SpectralDataset::new(
        Series::new(join_name(&xq, &xu), x),
        Series::new(join_name(&yq, &yu), y),
    ))
}

fn join_name(quantity: &str, unit: &str) -> ColumnName {
    if unit.is_empty() {
        ColumnName::new(quantity)
    } else {
        ColumnName::new(format!("{quantity} {unit}"))
    }
}
