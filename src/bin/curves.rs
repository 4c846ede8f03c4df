use std::path::Path;

use anyhow::Context;
use eframe::egui;

use trainviz::app::CurvesApp;
use trainviz::data::loader::{self, TRAINING_LOG};
use trainviz::error::RenderBackendError;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let log = loader::load_training_log(Path::new(TRAINING_LOG))
        .context("loading training log")?;
    log::info!("loaded training log with {} epochs", log.len());

    let app = CurvesApp::new(log);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 500.0])
            .with_min_inner_size([500.0, 300.0]),
        ..Default::default()
    };

    // Blocks until the viewer closes the window.
    eframe::run_native(
        "trainviz – Training Curves",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    // eframe::Error is not Send + Sync, so it cannot enter anyhow directly.
    .map_err(|e| anyhow::anyhow!("{}", RenderBackendError::from(e)))?;

    Ok(())
}
