use nalgebra::{DMatrix, DVector};

use crate::error::{Error, Result};

pub const MIN_WINDOW: usize = 3;
pub const MAX_WINDOW: usize = 500;

/// Savitzky-Golay smoothing.
///
/// Each interior output is the least-squares polynomial of degree
/// `polyorder`, fitted over `window` samples starting at
/// `i - (window - 1) / 2` and evaluated at the window centre. For even
/// windows that centre lies half a sample to the right of `i`. The first and
/// last `window / 2` outputs come from the polynomial fitted to the first
/// (last) full window, evaluated at their own positions, so the output has
/// the same length as the input.
pub fn savgol_filter(y: &[f64], window: usize, polyorder: usize) -> Result<Vec<f64>> {
    let invalid = |reason: String| Error::InvalidWindow { window, reason };
    if !(MIN_WINDOW..=MAX_WINDOW).contains(&window) {
        return Err(invalid(format!("must be within {MIN_WINDOW}..={MAX_WINDOW}")));
    }
    if polyorder >= window {
        return Err(invalid(format!("polynomial order {polyorder} needs a wider window")));
    }
    if window > y.len() {
        return Err(invalid(format!("curve has only {} samples", y.len())));
    }
    let singular = || invalid("singular least-squares system".to_string());

    let n = y.len();
    let edge = window / 2;
    let centre = (window - 1) as f64 / 2.0;
    let interior = kernel(window, centre, polyorder).ok_or_else(singular)?;
    let mut edge_kernels: Vec<Option<DVector<f64>>> = vec![None; window];
    let mut out = Vec::with_capacity(n);

    for i in 0..n {
        let value = if i < edge || i + edge >= n {
            let start = if i < edge { 0 } else { n - window };
            let pos = i - start;
            let weights = match edge_kernels[pos].take() {
                Some(k) => k,
                None => kernel(window, pos as f64, polyorder).ok_or_else(singular)?,
            };
            let value = apply(&weights, &y[start..start + window]);
            edge_kernels[pos] = Some(weights);
            value
        } else {
            let start = i - (window - 1) / 2;
            apply(&interior, &y[start..start + window])
        };
        out.push(value);
    }
    Ok(out)
}

fn apply(weights: &DVector<f64>, samples: &[f64]) -> f64 {
    weights.iter().zip(samples).map(|(c, v)| c * v).sum()
}

/// Weights that evaluate the fitted polynomial at window offset `pos`.
///
/// With `A[k][j] = t_k^j` and `t` centred on `pos`, the fit evaluated at
/// `t = 0` is `e0ᵀ (AᵀA)⁻¹ Aᵀ y`, so the weights are `A (AᵀA)⁻¹ e0`.
fn kernel(window: usize, pos: f64, polyorder: usize) -> Option<DVector<f64>> {
    let scale = window as f64;
    let a = DMatrix::from_fn(window, polyorder + 1, |k, j| {
        ((k as f64 - pos) / scale).powi(j as i32)
    });
    let ata = a.transpose() * &a;
    let mut e0 = DVector::zeros(polyorder + 1);
    e0[0] = 1.0;
    let z = ata.lu().solve(&e0)?;
    Some(&a * z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_five_point_quadratic_weights() {
        // -3, 12, 17, 12, -3 over 35
        let k = kernel(5, 2.0, 2).unwrap();
        let expected = [-3.0, 12.0, 17.0, 12.0, -3.0].map(|v| v / 35.0);
        for (got, want) in k.iter().zip(expected) {
            assert!((got - want).abs() < 1e-12, "{got} vs {want}");
        }
    }

    fn quadratic(x: f64) -> f64 {
        0.5 * x * x - 3.0 * x + 2.0
    }

    #[test]
    fn odd_window_passes_quadratic_through_unchanged() {
        let y: Vec<f64> = (0..40).map(|i| quadratic(i as f64)).collect();
        for window in [3, 7, 21] {
            let s = savgol_filter(&y, window, 2).unwrap();
            for (a, b) in s.iter().zip(&y) {
                assert!((a - b).abs() < 1e-6, "window {window}: {a} vs {b}");
            }
        }
    }

    #[test]
    fn even_window_evaluates_half_a_sample_right() {
        let y: Vec<f64> = (0..12).map(|i| (i as f64).powi(2)).collect();
        let s = savgol_filter(&y, 4, 2).unwrap();
        let expected = [12.25, 20.25, 30.25, 42.25, 56.25];
        for (got, want) in s[3..8].iter().zip(expected) {
            assert!((got - want).abs() < 1e-9, "{got} vs {want}");
        }
        // edges use the end windows at their own positions
        for i in [0, 1, 10, 11] {
            assert!((s[i] - y[i]).abs() < 1e-9, "edge {i}: {}", s[i]);
        }
    }

    #[test]
    fn even_window_interior_on_quadratic() {
        let n = 40;
        let window = 20;
        let y: Vec<f64> = (0..n).map(|i| quadratic(i as f64)).collect();
        let s = savgol_filter(&y, window, 2).unwrap();
        for i in 0..n {
            let want = if i < window / 2 || i + window / 2 >= n {
                quadratic(i as f64)
            } else {
                quadratic(i as f64 + 0.5)
            };
            assert!((s[i] - want).abs() < 1e-6, "sample {i}: {} vs {want}", s[i]);
        }
    }

    #[test]
    fn rejects_window_out_of_bounds() {
        let y = vec![0.0; 1000];
        assert!(savgol_filter(&y, 2, 2).is_err());
        assert!(savgol_filter(&y, 501, 2).is_err());
        assert!(savgol_filter(&y[..10], 11, 2).is_err());
    }
}
