use eframe::egui::Ui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::data::model::TrainingLog;

// ---------------------------------------------------------------------------
// Training curves (central panel)
// ---------------------------------------------------------------------------

/// Render the two training curves side by side: loss on the left, accuracy
/// on the right. The panels share no axes.
pub fn training_curves(ui: &mut Ui, log: &TrainingLog) {
    if log.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Training log is empty");
        });
        return;
    }

    ui.columns(2, |cols| {
        curve_panel(
            &mut cols[0],
            "loss_plot",
            "Loss",
            "loss",
            "Loss",
            &log.epochs,
            &log.loss,
        );
        curve_panel(
            &mut cols[1],
            "accuracy_plot",
            "Accuracy",
            "Accuracy",
            "Train Accuracy",
            &log.epochs,
            &log.accuracy,
        );
    });
}

fn curve_panel(
    ui: &mut Ui,
    id: &str,
    title: &str,
    y_label: &str,
    line_name: &str,
    epochs: &[f64],
    values: &[f64],
) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(title);
    });

    let points: PlotPoints = epochs
        .iter()
        .zip(values.iter())
        .map(|(&e, &v)| [e, v])
        .collect();

    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label("epoch")
        .y_axis_label(y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new(points).name(line_name).width(1.5));
        });
}
