use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = 210.0 + (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Trace colours
// ---------------------------------------------------------------------------

/// Colours of the plotted traces.
#[derive(Debug, Clone)]
pub struct TraceColors {
    pub curve: Color32,
    pub background: Color32,
    pub signal: Color32,
    /// Dashed line through the picked points.
    pub baseline: Color32,
    /// Vertical marker where the reflectance was found.
    pub marker: Color32,
}

impl Default for TraceColors {
    fn default() -> Self {
        let palette = generate_palette(3);
        Self {
            curve: palette[0],
            background: palette[1],
            signal: palette[2],
            baseline: Color32::RED,
            marker: Color32::from_gray(0xAA),
        }
    }
}
