use std::path::Path;

use anyhow::Context;
use eframe::egui;

use trainviz::app::ScatterApp;
use trainviz::data::loader::{self, LABEL_TABLE, POINT_TABLE};
use trainviz::error::RenderBackendError;
use trainviz::surface;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let points = loader::load_points(Path::new(POINT_TABLE), Path::new(LABEL_TABLE))
        .context("loading labeled training points")?;
    log::info!("loaded {} labeled points", points.len());

    let app = ScatterApp::new(points.partition(), surface::reference_surface());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    // Blocks until the viewer closes the window.
    eframe::run_native(
        "trainviz – 3D Scatter",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    // eframe::Error is not Send + Sync, so it cannot enter anyhow directly.
    .map_err(|e| anyhow::anyhow!("{}", RenderBackendError::from(e)))?;

    Ok(())
}
