use smooth_spectra::data::model::{ColumnName, Series, SpectralDataset};
use smooth_spectra::engine::{
    difference, find_peaks, reflectance, savgol_filter, snap, LineFit, SnapMode,
};
use smooth_spectra::Error;

fn curve(x: &[f64], y: &[f64]) -> SpectralDataset {
    SpectralDataset::new(
        Series::new(ColumnName::new("Wavelength nm"), x.to_vec()),
        Series::new(ColumnName::new("Reflectance %"), y.to_vec()),
    )
}

fn axis(n: usize) -> Vec<f64> {
    (0..n).map(|i| 400.0 + i as f64).collect()
}

#[test]
fn difference_is_elementwise() {
    let x = axis(5);
    let a = curve(&x, &[5.0, 4.0, 3.0, 2.0, 1.0]);
    let b = curve(&x, &[1.0, 1.5, 2.0, 2.5, 3.0]);
    let d = difference(&a, &b).unwrap();
    for i in 0..5 {
        assert_eq!(d.y.values[i], a.y.values[i] - b.y.values[i]);
    }
    assert_eq!(d.x.values, x);
    assert_eq!(d.y.name, a.y.name);
}

#[test]
fn difference_requires_equal_length() {
    let a = curve(&axis(3), &[1.0, 2.0, 3.0]);
    let b = curve(&axis(2), &[1.0, 2.0]);
    assert!(matches!(difference(&a, &b), Err(Error::SamplingMismatch { .. })));
}

#[test]
fn smoothing_keeps_length_for_all_windows() {
    let y: Vec<f64> = (0..600).map(|i| (i as f64 * 0.05).sin() + (i % 7) as f64 * 0.01).collect();
    for window in [3, 4, 5, 50, 51, 499, 500] {
        let s = savgol_filter(&y, window, 2).unwrap();
        assert_eq!(s.len(), y.len(), "window {window}");
    }
}

#[test]
fn smoothing_reduces_noise_on_a_line() {
    let y: Vec<f64> = (0..200)
        .map(|i| 2.0 * i as f64 + if i % 2 == 0 { 0.5 } else { -0.5 })
        .collect();
    let s = savgol_filter(&y, 21, 2).unwrap();
    let residual = |v: &[f64]| -> f64 {
        v.iter()
            .enumerate()
            .map(|(i, y)| (y - 2.0 * i as f64).abs())
            .sum::<f64>()
    };
    assert!(residual(&s) < residual(&y) / 4.0);
}

#[test]
fn line_fit_recovers_both_points() {
    let (p1, p2) = ((410.0, 0.25), (470.0, 1.75));
    let line = LineFit::through(p1, p2).unwrap();
    assert!((line.slope - (p2.1 - p1.1) / (p2.0 - p1.0)).abs() < 1e-12);
    assert!((line.intercept - (p1.1 - line.slope * p1.0)).abs() < 1e-12);
    assert!((line.eval(p2.0) - p2.1).abs() < 1e-9);
    assert!((line.eval(p1.0) - p1.1).abs() < 1e-9);
}

#[test]
fn reflectance_finds_deepest_dip_below_line() {
    let x = axis(7);
    let y = [1.0, 0.8, 0.5, 0.2, 0.6, 0.9, 1.0];
    let c = curve(&x, &y);
    let line = LineFit::through((x[0], y[0]), (x[6], y[6])).unwrap();
    let r = reflectance(&c, &line, 0, 6).unwrap();

    let expected: Vec<f64> = y.iter().map(|v| 1.0 - v).collect();
    let max = expected.iter().cloned().fold(f64::MIN, f64::max);
    assert!((r.value - max).abs() < 1e-12);
    assert_eq!(r.index, 3);
    assert_eq!(r.x, 403.0);
    assert_eq!(r.gaps.len(), 7);
    for ((gx, gap), (xi, want)) in r.gaps.iter().zip(x.iter().zip(&expected)) {
        assert_eq!(gx, xi);
        assert!((gap - want).abs() < 1e-12);
    }
}

#[test]
fn reflectance_range_is_order_independent() {
    let x = axis(6);
    let c = curve(&x, &[0.0, 1.0, -1.0, 3.0, 0.0, 5.0]);
    let line = LineFit::through((x[1], 1.0), (x[4], 0.0)).unwrap();
    let forward = reflectance(&c, &line, 1, 4).unwrap();
    let backward = reflectance(&c, &line, 4, 1).unwrap();
    assert_eq!(forward, backward);
    assert_eq!(forward.gaps.len(), 4);
    assert_eq!(forward.index, 2);
}

#[test]
fn reflectance_rejects_index_past_end() {
    let c = curve(&axis(3), &[0.0, 1.0, 0.0]);
    let line = LineFit::through((400.0, 0.0), (402.0, 0.0)).unwrap();
    assert!(matches!(
        reflectance(&c, &line, 0, 3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    ));
}

#[test]
fn reflectance_skips_missing_samples() {
    let x = axis(5);
    let c = curve(&x, &[f64::NAN, 0.5, 0.1, f64::NAN, 0.9]);
    let line = LineFit::through((x[0], 1.0), (x[4], 1.0)).unwrap();
    let r = reflectance(&c, &line, 0, 4).unwrap();
    assert!((r.value - 0.9).abs() < 1e-12);
    assert_eq!(r.index, 2);
    assert_eq!(r.x, 402.0);
    assert!(r.gaps[0].1.is_nan());
}

#[test]
fn reflectance_over_missing_samples_only_is_an_error() {
    let x = axis(4);
    let c = curve(&x, &[0.0, f64::NAN, f64::NAN, 0.0]);
    let line = LineFit::through((x[0], 0.0), (x[3], 0.0)).unwrap();
    assert!(matches!(
        reflectance(&c, &line, 2, 1),
        Err(Error::NoFiniteGap { from: 1, to: 2 })
    ));
}

#[test]
fn snap_nearest_and_local_maximum() {
    let x = axis(9);
    let y = [0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0];
    let c = curve(&x, &y);

    let nearest = snap(&c, 404.4, SnapMode::Nearest).unwrap();
    assert_eq!(nearest.index, 4);
    assert_eq!((nearest.x, nearest.y), (404.0, 0.0));

    assert_eq!(find_peaks(&y), vec![1, 6]);
    let peak = snap(&c, 404.4, SnapMode::LocalMaximum).unwrap();
    assert_eq!(peak.index, 6);
    let peak = snap(&c, 402.0, SnapMode::LocalMaximum).unwrap();
    assert_eq!(peak.index, 1);
}

#[test]
fn snap_without_maxima_returns_none() {
    let x = axis(4);
    let c = curve(&x, &[1.0, 2.0, 3.0, 4.0]);
    assert!(snap(&c, 401.0, SnapMode::LocalMaximum).is_none());
    assert!(snap(&curve(&[], &[]), 401.0, SnapMode::Nearest).is_none());
}
