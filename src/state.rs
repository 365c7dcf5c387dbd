use std::path::Path;

use anyhow::Context;

use smooth_spectra::data::loader;
use smooth_spectra::engine::SnapMode;
use smooth_spectra::{Config, Session};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: Config,

    /// Loaded data and everything derived from it.
    pub session: Session,

    /// Savitzky-Golay window chosen in the toolbar.
    pub window: usize,

    /// Snap clicks to local maxima instead of the nearest sample.
    pub snap_to_maxima: bool,

    /// Pointer position over the plot, in data coordinates.
    pub cursor: Option<[f64; 2]>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            window: config.smoothing.window,
            snap_to_maxima: config.snap_to_maxima,
            config,
            session: Session::default(),
            cursor: None,
            status_message: None,
        }
    }

    pub fn snap_mode(&self) -> SnapMode {
        if self.snap_to_maxima {
            SnapMode::LocalMaximum
        } else {
            SnapMode::Nearest
        }
    }

    /// Replace the session with the outcome of an action, or report why the
    /// action failed and keep the old one.
    fn apply(&mut self, next: anyhow::Result<Session>) {
        match next {
            Ok(session) => {
                self.session = session;
                self.status_message = None;
            }
            Err(e) => {
                log::error!("{e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    pub fn load_background(&mut self, path: &Path) {
        let next = loader::load_file(path, &self.config.ingest)
            .with_context(|| format!("loading background {}", path.display()))
            .map(|ds| self.session.with_background(ds));
        self.apply(next);
    }

    pub fn load_signal(&mut self, path: &Path) {
        let next = loader::load_file(path, &self.config.ingest)
            .with_context(|| format!("loading signal {}", path.display()))
            .map(|ds| self.session.with_signal(ds));
        self.apply(next);
    }

    pub fn compute_difference(&mut self) {
        let next = self
            .session
            .compute_difference()
            .context("computing difference");
        self.apply(next);
    }

    pub fn smooth(&mut self) {
        let next = self
            .session
            .smooth(self.window, self.config.smoothing.polyorder)
            .context("smoothing");
        self.apply(next);
    }

    pub fn click(&mut self, x: f64) {
        let next = self.session.click(x, self.snap_mode()).context("selecting point");
        self.apply(next);
    }

    pub fn compute_reflectance(&mut self) {
        let next = self
            .session
            .compute_reflectance()
            .context("calculating reflectance");
        self.apply(next);
    }

    pub fn save_curve(&mut self, path: &Path) {
        let saved = self
            .session
            .save_curve(path, self.config.export_precision)
            .with_context(|| format!("saving {}", path.display()));
        self.report_save(saved, path);
    }

    pub fn save_reflectance(&mut self, path: &Path) {
        let saved = self
            .session
            .save_reflectance(path, self.config.export_precision)
            .with_context(|| format!("saving {}", path.display()));
        self.report_save(saved, path);
    }

    fn report_save(&mut self, saved: anyhow::Result<()>, path: &Path) {
        match saved {
            Ok(()) => self.status_message = Some(format!("Saved {}", path.display())),
            Err(e) => {
                log::error!("{e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    /// Reflectance label text, `----` until one has been computed.
    pub fn reflectance_label(&self) -> String {
        match self.session.reflectance() {
            Some(r) => format!("Reflectance: {}", r.display(self.config.display_precision)),
            None => "Reflectance: ----".to_string(),
        }
    }
}
