use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Scene colors
// ---------------------------------------------------------------------------

/// Build a `Color32` from an HSL triple.
fn hsl(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}

/// Marker color for the label-0 group ("f < 0").
pub fn below_color() -> Color32 {
    hsl(220.0, 0.75, 0.55)
}

/// Marker color for the label-1 group ("f > 0").
pub fn above_color() -> Color32 {
    hsl(2.0, 0.75, 0.55)
}

/// Semi-transparent gray fill for the reference surface mesh.
pub fn surface_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(140, 140, 140, 70)
}

/// Dim a color by view-space depth, `t` in [0, 1] with 1 = nearest.
/// Keeps far geometry visible but clearly behind near geometry.
pub fn depth_shade(base: Color32, t: f32) -> Color32 {
    let f = 0.55 + 0.45 * t.clamp(0.0, 1.0);
    Color32::from_rgba_unmultiplied(
        (base.r() as f32 * f) as u8,
        (base.g() as f32 * f) as u8,
        (base.b() as f32 * f) as u8,
        base.a(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_colors_are_distinct() {
        assert_ne!(below_color(), above_color());
    }

    #[test]
    fn depth_shade_keeps_near_geometry_brighter() {
        let base = below_color();
        let near = depth_shade(base, 1.0);
        let far = depth_shade(base, 0.0);
        assert!(far.r() <= near.r() && far.g() <= near.g() && far.b() <= near.b());
        assert_eq!(near, base);
    }
}
