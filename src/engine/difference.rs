use crate::data::model::SpectralDataset;
use crate::error::{Error, Result};

/// Relative tolerance when comparing the x axes of two measurements.
const X_TOLERANCE: f64 = 1e-9;

/// `background.y - signal.y`, sample by sample.
///
/// Both measurements must share their x axis: same length and the same x
/// value at every index. There is no interpolation. The result keeps the
/// background's x axis and column names.
pub fn difference(background: &SpectralDataset, signal: &SpectralDataset) -> Result<SpectralDataset> {
    if background.len() != signal.len() {
        return Err(Error::SamplingMismatch {
            reason: format!(
                "background has {} samples, signal has {}",
                background.len(),
                signal.len()
            ),
        });
    }

    let xs = background.x.values.iter().zip(&signal.x.values);
    if let Some((i, (a, b))) = xs.enumerate().find(|(_, (a, b))| !same_x(**a, **b)) {
        return Err(Error::SamplingMismatch {
            reason: format!("sample {i}: x = {a} vs {b}"),
        });
    }

    let y = background
        .y
        .values
        .iter()
        .zip(&signal.y.values)
        .map(|(b, s)| b - s)
        .collect();
    Ok(background.with_y_values(y))
}

fn same_x(a: f64, b: f64) -> bool {
    (a - b).abs() <= X_TOLERANCE * a.abs().max(b.abs()).max(1.0)
}
