use crate::data::model::SpectralDataset;
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// LineFit – baseline through two picked points
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    /// The line through `(x1, y1)` and `(x2, y2)`.
    pub fn through((x1, y1): (f64, f64), (x2, y2): (f64, f64)) -> Result<Self> {
        if x1 == x2 {
            return Err(Error::DegenerateLine { x: x1 });
        }
        let slope = (y2 - y1) / (x2 - x1);
        Ok(Self {
            slope,
            intercept: y1 - slope * x1,
        })
    }

    pub fn eval(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

// ---------------------------------------------------------------------------
// Reflectance – largest dip below the baseline
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Reflectance {
    /// Largest `line(x) - y` in the range.
    pub value: f64,
    /// Curve index where `value` was reached (first one on ties).
    pub index: usize,
    /// x at `index`.
    pub x: f64,
    /// `(x, line(x) - y)` for every sample of the range.
    pub gaps: Vec<(f64, f64)>,
}

impl Reflectance {
    /// The value rounded for display, e.g. `0.1234`.
    pub fn display(&self, precision: usize) -> String {
        format!("{:.*}", precision, self.value)
    }
}

/// Gap between `line` and `curve` over the inclusive index range spanned by
/// `i1` and `i2` (in either order).
pub fn reflectance(curve: &SpectralDataset, line: &LineFit, i1: usize, i2: usize) -> Result<Reflectance> {
    let (lo, hi) = (i1.min(i2), i1.max(i2));
    if hi >= curve.len() {
        return Err(Error::IndexOutOfRange {
            index: hi,
            len: curve.len(),
        });
    }

    let gaps: Vec<(f64, f64)> = (lo..=hi)
        .map(|i| {
            let x = curve.x.values[i];
            (x, line.eval(x) - curve.y.values[i])
        })
        .collect();

    // NaN gaps (missing samples) never win; ties keep the first index.
    let mut best: Option<usize> = None;
    for (k, &(_, gap)) in gaps.iter().enumerate() {
        if gap.is_nan() {
            continue;
        }
        if best.map_or(true, |b| gap > gaps[b].1) {
            best = Some(k);
        }
    }
    let best = best.ok_or(Error::NoFiniteGap { from: lo, to: hi })?;
    let (x, value) = gaps[best];

    Ok(Reflectance {
        value,
        index: lo + best,
        x,
        gaps,
    })
}
