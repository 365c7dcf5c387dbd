use eframe::egui::Ui;
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, Points, VLine};

use crate::color::TraceColors;
use crate::state::AppState;

/// What the pointer did over the plot this frame.
#[derive(Debug, Default)]
pub struct PlotInput {
    /// x of a primary click, in data coordinates.
    pub clicked_x: Option<f64>,
    pub hover: Option<[f64; 2]>,
}

// ---------------------------------------------------------------------------
// Spectral plot (central panel)
// ---------------------------------------------------------------------------

/// Render the curves in the central panel.
///
/// Before a difference is computed the loaded background and signal are
/// shown; afterwards only the difference curve, the baseline through the
/// picked points and the reflectance marker.
pub fn spectral_plot(ui: &mut Ui, state: &AppState, colors: &TraceColors) -> PlotInput {
    let session = &state.session;
    if session.background().is_none() && session.signal().is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Load a background and a signal to start");
        });
        return PlotInput::default();
    }

    let (x_label, y_label) = match session.curve().or(session.background()).or(session.signal()) {
        Some(ds) => (ds.x.name.to_string(), ds.y.name.to_string()),
        None => (String::new(), String::new()),
    };

    let response = Plot::new("spectral_plot")
        .legend(Legend::default())
        .x_axis_label(x_label)
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            if let Some(curve) = session.curve() {
                let points: PlotPoints = curve.points().collect();
                plot_ui.line(Line::new(points).name("difference").color(colors.curve).width(1.5));

                let picked: Vec<[f64; 2]> = [session.selection().first(), session.selection().second()]
                    .into_iter()
                    .flatten()
                    .map(|p| [p.x, p.y])
                    .collect();
                if !picked.is_empty() {
                    plot_ui.points(
                        Points::new(PlotPoints::from(picked))
                            .radius(4.0)
                            .color(colors.baseline),
                    );
                }

                if let Some(baseline) = session.baseline() {
                    let ends = vec![
                        [baseline.from.x, baseline.from.y],
                        [baseline.to.x, baseline.to.y],
                    ];
                    plot_ui.line(
                        Line::new(PlotPoints::from(ends))
                            .color(colors.baseline)
                            .style(LineStyle::dashed_loose()),
                    );
                }

                if let Some(r) = session.reflectance() {
                    plot_ui.vline(VLine::new(r.x).color(colors.marker));
                }
            } else {
                for (name, ds, color) in [
                    ("background", session.background(), colors.background),
                    ("signal", session.signal(), colors.signal),
                ] {
                    if let Some(ds) = ds {
                        let points: PlotPoints = ds.points().collect();
                        plot_ui.line(Line::new(points).name(name).color(color).width(1.5));
                    }
                }
            }

            let hover = plot_ui.pointer_coordinate().map(|p| [p.x, p.y]);
            let clicked_x = if plot_ui.response().clicked() { hover.map(|p| p[0]) } else { None };
            PlotInput { clicked_x, hover }
        });

    response.inner
}
