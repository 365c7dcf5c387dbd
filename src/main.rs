mod app;
mod color;
mod state;
mod ui;

use app::SmoothSpectraApp;
use eframe::egui;
use smooth_spectra::Config;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env()?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "SmoothSpectra",
        options,
        Box::new(|_cc| Ok(Box::new(SmoothSpectraApp::new(config)))),
    )
    .map_err(|e| anyhow::anyhow!("running the UI: {e}"))
}
