//! The reference decision surface of the bowl-classifier experiment.
//!
//! The training data is labeled against `f(x, y) = 8 − (x−3)² − (y−5)²`;
//! the scatter view overlays this surface so the point groups can be judged
//! by eye. The grid is synthetic and independent of any loaded data.

/// Domain shared by both axes of the grid and the view bounds.
pub const DOMAIN_MIN: f64 = -10.0;
pub const DOMAIN_MAX: f64 = 20.0;

/// Samples per axis of the reference grid.
pub const GRID_SAMPLES: usize = 80;

/// The classifier's ground-truth function.
pub fn bowl(x: f64, y: f64) -> f64 {
    8.0 - (x - 3.0).powi(2) - (y - 5.0).powi(2)
}

/// A dense elevation grid: `z` is row-major over `ys` × `xs`.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    z: Vec<f64>,
}

impl SurfaceGrid {
    /// Elevation at grid cell (`i` along x, `j` along y).
    pub fn z_at(&self, i: usize, j: usize) -> f64 {
        self.z[j * self.xs.len() + i]
    }

    /// The (x, y, z) triple at grid cell (`i`, `j`).
    pub fn vertex(&self, i: usize, j: usize) -> [f64; 3] {
        [self.xs[i], self.ys[j], self.z_at(i, j)]
    }
}

/// Build the fixed 80×80 reference grid over [−10, 20]², with the bowl
/// elevation clamped to [−10, 20]. Pure: no inputs, identical output on
/// every call.
pub fn reference_surface() -> SurfaceGrid {
    let xs = linspace(DOMAIN_MIN, DOMAIN_MAX, GRID_SAMPLES);
    let ys = linspace(DOMAIN_MIN, DOMAIN_MAX, GRID_SAMPLES);

    let mut z = Vec::with_capacity(GRID_SAMPLES * GRID_SAMPLES);
    for &y in &ys {
        for &x in &xs {
            z.push(bowl(x, y).clamp(DOMAIN_MIN, DOMAIN_MAX));
        }
    }

    SurfaceGrid { xs, ys, z }
}

/// `n` evenly spaced values from `start` to `stop` inclusive.
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let step = (stop - start) / (n - 1) as f64;
    (0..n).map(|i| start + step * i as f64).collect()
}
