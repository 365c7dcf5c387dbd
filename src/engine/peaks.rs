use serde::{Deserialize, Serialize};

use crate::data::model::SpectralDataset;

/// Indices of the local maxima of `y`.
///
/// A sample is a maximum when both neighbours are strictly lower. A flat top
/// counts once, at its middle sample (rounded down). The first and last
/// samples are never maxima. No height or prominence threshold is applied.
pub fn find_peaks(y: &[f64]) -> Vec<usize> {
    let mut peaks = Vec::new();
    if y.len() < 3 {
        return peaks;
    }
    let last = y.len() - 1;

    let mut i = 1;
    while i < last {
        if y[i - 1] < y[i] {
            let mut ahead = i + 1;
            while ahead < last && y[ahead] == y[i] {
                ahead += 1;
            }
            if y[ahead] < y[i] {
                peaks.push((i + ahead - 1) / 2);
                i = ahead;
            }
        }
        i += 1;
    }
    peaks
}

// ---------------------------------------------------------------------------
// Snapping a pointer position onto the curve
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SnapMode {
    /// The sample whose x is closest to the pointer.
    #[default]
    Nearest,
    /// The local maximum whose x is closest to the pointer.
    LocalMaximum,
}

/// A curve sample picked by the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapped {
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Snap `x_click` onto a sample of `curve`.
///
/// Returns `None` for an empty curve, or in [`SnapMode::LocalMaximum`] when
/// the curve has no local maximum.
pub fn snap(curve: &SpectralDataset, x_click: f64, mode: SnapMode) -> Option<Snapped> {
    let xs = &curve.x.values;
    let distance = |i: &usize| (xs[*i] - x_click).abs();

    let index = match mode {
        SnapMode::Nearest => (0..xs.len()).min_by(|a, b| distance(a).total_cmp(&distance(b)))?,
        SnapMode::LocalMaximum => find_peaks(&curve.y.values)
            .into_iter()
            .min_by(|a, b| distance(a).total_cmp(&distance(b)))?,
    };
    let (x, y) = curve.point(index)?;
    Some(Snapped { index, x, y })
}
