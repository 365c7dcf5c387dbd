use std::path::Path;

use crate::data::export;
use crate::data::model::SpectralDataset;
use crate::engine::{self, LineFit, Reflectance, SnapMode, Snapped};
use crate::error::{Error, Result};

// ---------------------------------------------------------------------------
// Selection – points picked on the curve
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Selection {
    #[default]
    Empty,
    First(Snapped),
    Pair(Snapped, Snapped),
}

impl Selection {
    pub fn first(&self) -> Option<Snapped> {
        match *self {
            Selection::Empty => None,
            Selection::First(p) | Selection::Pair(p, _) => Some(p),
        }
    }

    pub fn second(&self) -> Option<Snapped> {
        match *self {
            Selection::Pair(_, p) => Some(p),
            _ => None,
        }
    }
}

/// The fitted line together with the two samples it was fitted through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub fit: LineFit,
    pub from: Snapped,
    pub to: Snapped,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// State of one comparison session.
///
/// Each user action produces a new `Session`; the old value is left
/// untouched, so a failed action never corrupts what is on screen. Anything
/// derived from the curve (selection, baseline, reflectance) is dropped
/// whenever the curve itself changes.
#[derive(Debug, Clone, Default)]
pub struct Session {
    background: Option<SpectralDataset>,
    signal: Option<SpectralDataset>,
    /// Unsmoothed difference; smoothing always starts from here.
    raw: Option<SpectralDataset>,
    curve: Option<SpectralDataset>,
    selection: Selection,
    baseline: Option<Baseline>,
    reflectance: Option<Reflectance>,
}

impl Session {
    pub fn background(&self) -> Option<&SpectralDataset> {
        self.background.as_ref()
    }

    pub fn signal(&self) -> Option<&SpectralDataset> {
        self.signal.as_ref()
    }

    /// The curve currently worked on (difference, possibly smoothed).
    pub fn curve(&self) -> Option<&SpectralDataset> {
        self.curve.as_ref()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn baseline(&self) -> Option<&Baseline> {
        self.baseline.as_ref()
    }

    pub fn reflectance(&self) -> Option<&Reflectance> {
        self.reflectance.as_ref()
    }

    pub fn with_background(&self, dataset: SpectralDataset) -> Self {
        Self {
            background: Some(dataset),
            ..self.without_derived_curve()
        }
    }

    pub fn with_signal(&self, dataset: SpectralDataset) -> Self {
        Self {
            signal: Some(dataset),
            ..self.without_derived_curve()
        }
    }

    /// Background minus signal becomes the current (and raw) curve.
    pub fn compute_difference(&self) -> Result<Self> {
        let background = self.background.as_ref().ok_or(Error::Missing("a background"))?;
        let signal = self.signal.as_ref().ok_or(Error::Missing("a signal"))?;
        let diff = engine::difference(background, signal)?;
        log::info!("Computed difference over {} samples", diff.len());
        Ok(Self {
            raw: Some(diff.clone()),
            curve: Some(diff),
            ..self.without_curve_state()
        })
    }

    /// Replace the curve by the smoothed raw difference.
    pub fn smooth(&self, window: usize, polyorder: usize) -> Result<Self> {
        let raw = self.raw.as_ref().ok_or(Error::Missing("a difference curve"))?;
        let smoothed = engine::savgol_filter(&raw.y.values, window, polyorder)?;
        log::debug!("Smoothed with window {window}, order {polyorder}");
        Ok(Self {
            curve: Some(raw.with_y_values(smoothed)),
            ..self.without_curve_state()
        })
    }

    /// Handle a pointer click at `x` on the curve.
    ///
    /// The click is snapped onto the curve. Clicking the same sample twice
    /// in a row discards the second click. A second distinct click fits the
    /// baseline; a click after that starts a new pair while the previous
    /// baseline stays until it is replaced.
    pub fn click(&self, x: f64, mode: SnapMode) -> Result<Self> {
        let curve = self.curve.as_ref().ok_or(Error::Missing("a difference curve"))?;
        let Some(point) = engine::snap(curve, x, mode) else {
            log::warn!("Nothing to snap to near x = {x} ({mode:?})");
            return Ok(self.clone());
        };

        let mut next = self.clone();
        match self.selection {
            Selection::Empty | Selection::Pair(..) => {
                next.selection = Selection::First(point);
            }
            Selection::First(first) if first == point => {
                log::warn!("Ignoring second click on the same sample (x = {})", point.x);
            }
            Selection::First(first) => {
                let fit = LineFit::through((first.x, first.y), (point.x, point.y))?;
                next.selection = Selection::Pair(first, point);
                next.baseline = Some(Baseline {
                    fit,
                    from: first,
                    to: point,
                });
                next.reflectance = None;
            }
        }
        Ok(next)
    }

    /// Largest dip of the curve below the baseline, between its two points.
    pub fn compute_reflectance(&self) -> Result<Self> {
        let curve = self.curve.as_ref().ok_or(Error::Missing("a difference curve"))?;
        let baseline = self.baseline.as_ref().ok_or(Error::Missing("a fitted line"))?;
        let result = engine::reflectance(curve, &baseline.fit, baseline.from.index, baseline.to.index)?;
        log::info!("Reflectance {} at x = {}", result.value, result.x);
        Ok(Self {
            reflectance: Some(result),
            ..self.clone()
        })
    }

    /// Export the current curve.
    pub fn save_curve(&self, path: &Path, precision: usize) -> Result<()> {
        let curve = self.curve.as_ref().ok_or(Error::Missing("a difference curve"))?;
        export::save_dataset(path, curve, precision)
    }

    /// Export the per-sample gaps of the last reflectance computation.
    pub fn save_reflectance(&self, path: &Path, precision: usize) -> Result<()> {
        let curve = self.curve.as_ref().ok_or(Error::Missing("a difference curve"))?;
        let result = self.reflectance.as_ref().ok_or(Error::Missing("a reflectance"))?;
        export::save_curve(
            path,
            &curve.x.name,
            &curve.y.name,
            result.gaps.iter().copied(),
            precision,
        )
    }

    fn without_derived_curve(&self) -> Self {
        Self {
            background: self.background.clone(),
            signal: self.signal.clone(),
            ..Self::default()
        }
    }

    fn without_curve_state(&self) -> Self {
        Self {
            selection: Selection::Empty,
            baseline: None,
            reflectance: None,
            ..self.clone()
        }
    }
}
