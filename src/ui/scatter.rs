use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Ui};

use crate::color;
use crate::data::model::LabelGroups;
use crate::surface::{SurfaceGrid, DOMAIN_MAX, DOMAIN_MIN};

// ---------------------------------------------------------------------------
// Scene – everything the 3D view draws
// ---------------------------------------------------------------------------

/// The two labeled point groups plus the reference surface, with fixed view
/// bounds [−10, 20]³.
pub struct Scene {
    pub groups: LabelGroups,
    pub surface: SurfaceGrid,
}

/// Interactive state of the 3D view: pitch and yaw, updated by dragging.
pub struct SceneView {
    rot: [f32; 2],
}

impl Default for SceneView {
    fn default() -> Self {
        // Roughly the familiar default 3D viewpoint (elevated, turned left).
        Self { rot: [0.55, -1.05] }
    }
}

impl SceneView {
    /// Render the scene into the available space and handle drag-rotation.
    pub fn show(&mut self, ui: &mut Ui, scene: &Scene) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::drag());
        if response.dragged() {
            let delta = response.drag_delta();
            self.rot[1] += delta.x * 0.01;
            self.rot[0] = (self.rot[0] + delta.y * 0.01)
                .clamp(-std::f32::consts::FRAC_PI_2, std::f32::consts::FRAC_PI_2);
        }

        let painter = ui.painter_at(rect);
        draw_frame(&painter, rect, self.rot);

        let mut shapes = scene_shapes(rect, self.rot, scene);
        shapes.sort_by(|a, b| a.0.total_cmp(&b.0));
        painter.extend(shapes.into_iter().map(|(_, shape)| shape));

        draw_title_and_legend(&painter, rect);
    }
}

// ---------------------------------------------------------------------------
// 3-D → 2-D projection
// ---------------------------------------------------------------------------

const WORLD_CENTER: f64 = (DOMAIN_MIN + DOMAIN_MAX) / 2.0;
const WORLD_HALF: f64 = (DOMAIN_MAX - DOMAIN_MIN) / 2.0;

/// Project a world-space point (z up) to screen space. Returns the screen
/// position and a view depth that grows toward the viewer.
pub fn project(pos: [f64; 3], rot: [f32; 2], rect: Rect) -> (Pos2, f32) {
    let n = |v: f64| ((v - WORLD_CENTER) / WORLD_HALF) as f32;
    let (x, y, z) = (n(pos[0]), n(pos[1]), n(pos[2]));

    let (sp, cp) = rot[0].sin_cos();
    let (sy, cy) = rot[1].sin_cos();

    // Yaw around the world z axis, then pitch around the screen x axis.
    let x1 = x * cy - y * sy;
    let y1 = x * sy + y * cy;
    let up = z * cp - y1 * sp;
    let depth = y1 * cp + z * sp;

    let size = rect.width().min(rect.height()) * 0.33;
    let c = rect.center();
    (egui::pos2(c.x + x1 * size, c.y - up * size), depth)
}

/// Map a view depth into [0, 1] for shading (1 = nearest).
fn depth_t(depth: f32) -> f32 {
    ((depth + 2.0) / 4.0).clamp(0.0, 1.0)
}

// ---------------------------------------------------------------------------
// Shape construction (pure, painter-free)
// ---------------------------------------------------------------------------

/// Build all depth-tagged shapes of the scene: one translucent quad per
/// surface cell and one filled circle per point. Sorted far-to-near by the
/// caller before painting.
pub fn scene_shapes(rect: Rect, rot: [f32; 2], scene: &Scene) -> Vec<(f32, Shape)> {
    let grid = &scene.surface;
    let (nx, ny) = (grid.xs.len(), grid.ys.len());
    let mut shapes = Vec::with_capacity((nx - 1) * (ny - 1) + scene.groups.below.len()
        + scene.groups.above.len());

    for j in 0..ny - 1 {
        for i in 0..nx - 1 {
            let (p00, z00) = project(grid.vertex(i, j), rot, rect);
            let (p10, z10) = project(grid.vertex(i + 1, j), rot, rect);
            let (p11, z11) = project(grid.vertex(i + 1, j + 1), rot, rect);
            let (p01, z01) = project(grid.vertex(i, j + 1), rot, rect);

            let depth = (z00 + z10 + z11 + z01) / 4.0;
            let fill = color::depth_shade(color::surface_fill(), depth_t(depth));
            shapes.push((
                depth,
                Shape::convex_polygon(vec![p00, p10, p11, p01], fill, Stroke::NONE),
            ));
        }
    }

    for (points, base) in [
        (&scene.groups.below, color::below_color()),
        (&scene.groups.above, color::above_color()),
    ] {
        for &p in points {
            let (pos, depth) = project(p, rot, rect);
            let fill = color::depth_shade(base, depth_t(depth));
            shapes.push((depth, Shape::circle_filled(pos, 2.5, fill)));
        }
    }

    shapes
}

// ---------------------------------------------------------------------------
// Frame, title, legend
// ---------------------------------------------------------------------------

const FRAME_COLOR: Color32 = Color32::from_gray(90);

/// Draw the bounding cube of the view volume and the three axis labels.
fn draw_frame(painter: &egui::Painter, rect: Rect, rot: [f32; 2]) {
    let (lo, hi) = (DOMAIN_MIN, DOMAIN_MAX);
    let corners = [
        [lo, lo, lo], [hi, lo, lo], [hi, hi, lo], [lo, hi, lo],
        [lo, lo, hi], [hi, lo, hi], [hi, hi, hi], [lo, hi, hi],
    ];
    let edges = [
        (0, 1), (1, 2), (2, 3), (3, 0), // bottom
        (4, 5), (5, 6), (6, 7), (7, 4), // top
        (0, 4), (1, 5), (2, 6), (3, 7), // verticals
    ];

    let projected: Vec<Pos2> = corners
        .iter()
        .map(|&c| project(c, rot, rect).0)
        .collect();
    for (a, b) in edges {
        painter.line_segment([projected[a], projected[b]], Stroke::new(0.8, FRAME_COLOR));
    }

    let font = FontId::proportional(13.0);
    let label = |axis: &str, end: [f64; 3]| {
        // Push the label a little past the cube edge midpoint.
        let mid = [
            (end[0] + lo) / 2.0 + (end[0] - lo) * 0.1,
            (end[1] + lo) / 2.0 + (end[1] - lo) * 0.1,
            (end[2] + lo) / 2.0 + (end[2] - lo) * 0.1,
        ];
        let (pos, _) = project(mid, rot, rect);
        painter.text(
            pos + egui::vec2(0.0, 14.0),
            Align2::CENTER_CENTER,
            axis,
            font.clone(),
            FRAME_COLOR,
        );
    };
    label("X", [hi, lo, lo]);
    label("Y", [lo, hi, lo]);
    label("Z", [lo, lo, hi]);
}

fn draw_title_and_legend(painter: &egui::Painter, rect: Rect) {
    painter.text(
        egui::pos2(rect.center().x, rect.top() + 14.0),
        Align2::CENTER_CENTER,
        "3D Scatter Plot of Training Data",
        FontId::proportional(16.0),
        Color32::from_gray(220),
    );

    let entries = [
        ("f < 0", color::below_color()),
        ("f > 0", color::above_color()),
    ];
    let origin = egui::pos2(rect.right() - 90.0, rect.top() + 34.0);
    for (row, (name, c)) in entries.iter().enumerate() {
        let y = origin.y + row as f32 * 18.0;
        painter.circle_filled(egui::pos2(origin.x, y), 4.0, *c);
        painter.text(
            egui::pos2(origin.x + 10.0, y),
            Align2::LEFT_CENTER,
            *name,
            FontId::proportional(12.0),
            Color32::from_gray(200),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LabeledPoints;
    use crate::surface::reference_surface;

    fn view_rect() -> Rect {
        Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_center_projects_to_rect_center() {
        let center = [WORLD_CENTER, WORLD_CENTER, WORLD_CENTER];
        for rot in [[0.0, 0.0], [0.55, -1.05], [1.2, 2.0]] {
            let (pos, _) = project(center, rot, view_rect());
            assert!((pos - view_rect().center()).length() < 1e-3);
        }
    }

    #[test]
    fn depth_orders_points_along_the_view_axis() {
        // With no pitch and no yaw, larger world y is nearer to the viewer.
        let rect = view_rect();
        let (_, near) = project([5.0, 20.0, 5.0], [0.0, 0.0], rect);
        let (_, far) = project([5.0, -10.0, 5.0], [0.0, 0.0], rect);
        assert!(near > far);
    }

    #[test]
    fn scene_shapes_cover_surface_cells_and_points() {
        let pts = LabeledPoints {
            x: vec![0.0, 10.0],
            y: vec![0.0, 10.0],
            z: vec![0.0, 10.0],
            labels: vec![0.0, 1.0],
        };
        let scene = Scene {
            groups: pts.partition(),
            surface: reference_surface(),
        };
        let shapes = scene_shapes(view_rect(), SceneView::default().rot, &scene);
        assert_eq!(shapes.len(), 79 * 79 + 2);
    }
}
