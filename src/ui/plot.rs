use eframe::egui::Ui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::color::LossPalette;
use crate::data::loss::LossCurves;

// ---------------------------------------------------------------------------
// Loss chart
// ---------------------------------------------------------------------------

const TRAIN_NAME: &str = "Training Loss";
const VAL_NAME: &str = "Validation Loss";

/// Render both loss curves of one epoch on a single chart.
///
/// Each series is a line plus markers under the same name, so the legend
/// shows one entry per series: circles for training, squares for validation.
pub fn loss_plot(ui: &mut Ui, curves: &LossCurves) {
    let colors = LossPalette::default();

    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(curves.title());
    });

    Plot::new("loss_plot")
        .legend(Legend::default())
        .x_axis_label("Iteration")
        .y_axis_label("Loss")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (name, points, shape, color) in [
                (TRAIN_NAME, &curves.train, MarkerShape::Circle, colors.train),
                (VAL_NAME, &curves.val, MarkerShape::Square, colors.val),
            ] {
                plot_ui.line(
                    Line::new(PlotPoints::from(points.clone()))
                        .name(name)
                        .color(color)
                        .width(1.5),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(points.clone()))
                        .name(name)
                        .color(color)
                        .shape(shape)
                        .filled(true)
                        .radius(3.5),
                );
            }
        });
}
