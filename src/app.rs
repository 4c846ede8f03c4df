use eframe::egui;

use crate::data::model::{LabelGroups, TrainingLog};
use crate::surface::SurfaceGrid;
use crate::ui::curves;
use crate::ui::scatter::{Scene, SceneView};

// ---------------------------------------------------------------------------
// eframe App implementations
// ---------------------------------------------------------------------------

/// Pipeline A viewer: labeled 3D scatter with the reference surface.
pub struct ScatterApp {
    scene: Scene,
    view: SceneView,
}

impl ScatterApp {
    pub fn new(groups: LabelGroups, surface: SurfaceGrid) -> Self {
        Self {
            scene: Scene { groups, surface },
            view: SceneView::default(),
        }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let (below, above) = (self.scene.groups.below.len(), self.scene.groups.above.len());
                ui.label(format!(
                    "{} points loaded: {below} with f < 0, {above} with f > 0",
                    below + above,
                ));
                ui.separator();
                ui.label("drag to rotate");
            });
        });

        // ---- Central panel: 3D scene ----
        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.show(ui, &self.scene);
        });
    }
}

/// Pipeline B viewer: loss and accuracy curves.
pub struct CurvesApp {
    log: TrainingLog,
}

impl CurvesApp {
    pub fn new(log: TrainingLog) -> Self {
        Self { log }
    }
}

impl eframe::App for CurvesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.label(format!("{} epochs logged", self.log.len()));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            curves::training_curves(ui, &self.log);
        });
    }
}
