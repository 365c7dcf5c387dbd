use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – loading and processing
// ---------------------------------------------------------------------------

/// Render the top toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Load background").clicked() {
            if let Some(path) = open_file_dialog("Load background file") {
                state.load_background(&path);
            }
        }
        if ui.button("Load signal").clicked() {
            if let Some(path) = open_file_dialog("Load signal file") {
                state.load_signal(&path);
            }
        }

        ui.separator();

        if ui.button("Compute Difference").clicked() {
            state.compute_difference();
        }
        if ui.button("Smooth").clicked() {
            state.smooth();
        }
        let smoothing = &state.config.smoothing;
        ui.add(
            egui::DragValue::new(&mut state.window)
                .range(smoothing.min_window..=smoothing.max_window)
                .prefix("window "),
        );

        ui.separator();

        ui.checkbox(&mut state.snap_to_maxima, "Snap to local maxima");
    });
}

// ---------------------------------------------------------------------------
// Bottom bar – selection, reflectance, export
// ---------------------------------------------------------------------------

/// Render the bottom panel with the picked points and the result.
pub fn bottom_bar(ui: &mut Ui, state: &mut AppState) {
    let selection = state.session.selection();
    let fmt = |v: Option<f64>| v.map(|x| format!("{x:.2}")).unwrap_or_default();

    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!("X1: {}", fmt(selection.first().map(|p| p.x))));
        ui.label(format!("X2: {}", fmt(selection.second().map(|p| p.x))));
        ui.separator();
        ui.strong(state.reflectance_label());

        if let Some([x, y]) = state.cursor {
            ui.separator();
            ui.weak(format!("cursor {x:.2}, {y:.2}"));
        }
    });

    ui.horizontal(|ui: &mut Ui| {
        if ui.button("Save diff curve").clicked() {
            if let Some(path) = save_file_dialog() {
                state.save_curve(&path);
            }
        }
        if ui.button("Calculate refl.").clicked() {
            state.compute_reflectance();
        }
        if ui.button("Save reflectance").clicked() {
            if let Some(path) = save_file_dialog() {
                state.save_reflectance(&path);
            }
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            let color = if msg.starts_with("Error") {
                Color32::RED
            } else {
                ui.visuals().text_color()
            };
            ui.label(RichText::new(msg).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn open_file_dialog(title: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Text files", &["txt"])
        .add_filter("All files", &["*"])
        .pick_file()
}

fn save_file_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Save file")
        .add_filter("Text files", &["txt"])
        .save_file()
}
