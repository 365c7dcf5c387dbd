use eframe::egui;

use smooth_spectra::Config;

use crate::color::TraceColors;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SmoothSpectraApp {
    pub state: AppState,
    colors: TraceColors,
}

impl SmoothSpectraApp {
    pub fn new(config: Config) -> Self {
        Self {
            state: AppState::new(config),
            colors: TraceColors::default(),
        }
    }
}

impl eframe::App for SmoothSpectraApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: load / difference / smoothing ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: selection and reflectance ----
        egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
            panels::bottom_bar(ui, &mut self.state);
        });

        // ---- Central panel: plot ----
        let input = egui::CentralPanel::default()
            .show(ctx, |ui| plot::spectral_plot(ui, &self.state, &self.colors))
            .inner;

        self.state.cursor = input.hover;
        if let Some(x) = input.clicked_x {
            self.state.click(x);
        }
    }
}
