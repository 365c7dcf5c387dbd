//! Writes `background.txt` and `signal.txt` in the instrument export format
//! (semicolon separated, decimal commas, multi-row header) into the
//! directory given as first argument, or the current directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Write one export: a free-text preamble line, two header rows, then
/// `wavelength;raw;reflectance` rows with decimal commas.
fn write_export(path: &Path, title: &str, wavelengths: &[f64], values: &[f64]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record([title])?;
    writer.write_record(["Wavelength", "Counts", "Reflectance"])?;
    writer.write_record(["nm", "", "%"])?;
    for (&wl, &r) in wavelengths.iter().zip(values) {
        let counts = (r * 1000.0).round();
        writer.write_record([
            format!("{wl:.1}").replace('.', ","),
            format!("{counts}"),
            format!("{r:.5}").replace('.', ","),
        ])?;
    }
    writer.flush().with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    // Wavelengths: 400 → 799.5 nm, step 0.5
    let wavelengths: Vec<f64> = (0..800).map(|i| 400.0 + i as f64 * 0.5).collect();

    // Smooth slope plus noise; the signal adds a band around 600 nm, which
    // shows up as a dip in background - signal.
    let background: Vec<f64> = wavelengths
        .iter()
        .map(|&wl| 20.0 + 0.01 * (wl - 400.0) + rng.gauss(0.0, 0.05))
        .collect();
    let signal: Vec<f64> = wavelengths
        .iter()
        .zip(&background)
        .map(|(&wl, &b)| b + gaussian(wl, 600.0, 25.0, 4.0) + rng.gauss(0.0, 0.05))
        .collect();

    let bg_path = out_dir.join("background.txt");
    let sig_path = out_dir.join("signal.txt");
    write_export(&bg_path, "Sample background (before UV)", &wavelengths, &background)?;
    write_export(&sig_path, "Sample signal (after UV)", &wavelengths, &signal)?;

    log::info!("Wrote {} samples per file", wavelengths.len());
    println!(
        "Wrote {} and {} ({} wavelengths each)",
        bg_path.display(),
        sig_path.display(),
        wavelengths.len()
    );
    Ok(())
}
