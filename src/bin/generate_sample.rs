//! Writes sample training artifacts into the working directory so the
//! viewers can be tried without running the actual training process:
//! `x_train.csv`, `y_train.csv` and a synthetic `training_log.csv`.

use anyhow::{Context, Result};

use trainviz::data::loader::{LABEL_TABLE, POINT_TABLE, TRAINING_LOG};
use trainviz::surface::{bowl, DOMAIN_MAX, DOMAIN_MIN};

const NUM_POINTS: usize = 2_000;
const NUM_EPOCHS: usize = 100;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // Uniform samples over the experiment's domain, labeled against the bowl.
    let mut coords = [Vec::new(), Vec::new(), Vec::new()];
    let mut labels = Vec::with_capacity(NUM_POINTS);
    for _ in 0..NUM_POINTS {
        let point: Vec<f64> = (0..3)
            .map(|_| rng.uniform(DOMAIN_MIN, DOMAIN_MAX))
            .collect();
        for (axis, &v) in coords.iter_mut().zip(&point) {
            axis.push(v);
        }
        labels.push(label_for(point[0], point[1], point[2]));
    }

    write_matrix(POINT_TABLE, &[&coords[0], &coords[1], &coords[2]])?;
    write_matrix(LABEL_TABLE, &[&labels])?;
    write_training_log(&mut rng)?;

    let ones = labels.iter().filter(|&&l| l == 1.0).count();
    println!(
        "Wrote {NUM_POINTS} points ({ones} above the surface) and a \
         {NUM_EPOCHS}-epoch log to {POINT_TABLE}, {LABEL_TABLE}, {TRAINING_LOG}"
    );
    Ok(())
}

/// The ground-truth labeling rule: 1 above the bowl surface, 0 below.
fn label_for(x: f64, y: f64, z: f64) -> f64 {
    if z > bowl(x, y) { 1.0 } else { 0.0 }
}

/// Write rows of floats as headerless CSV, one record per row.
fn write_matrix(path: &str, rows: &[&[f64]]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    for row in rows {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush().with_context(|| format!("writing {path}"))?;
    Ok(())
}

/// Synthesize a plausible run: exponentially decaying loss, saturating
/// accuracy, both with a little noise.
fn write_training_log(rng: &mut SimpleRng) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(TRAINING_LOG).with_context(|| format!("creating {TRAINING_LOG}"))?;
    writer.write_record(["epoch", "loss", "train_accuracy"])?;

    for epoch in 1..=NUM_EPOCHS {
        let e = epoch as f64;
        let loss = (0.05 + 0.65 * (-e / 25.0).exp() + rng.gauss(0.0, 0.004)).max(0.0);
        let acc = (0.97 - 0.47 * (-e / 18.0).exp() + rng.gauss(0.0, 0.005)).clamp(0.0, 1.0);
        writer.write_record([epoch.to_string(), loss.to_string(), acc.to_string()])?;
    }

    writer.flush().with_context(|| format!("writing {TRAINING_LOG}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_is_deterministic_and_uniform_stays_in_domain() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..1000 {
            let v = a.uniform(DOMAIN_MIN, DOMAIN_MAX);
            assert_eq!(v, b.uniform(DOMAIN_MIN, DOMAIN_MAX));
            assert!((DOMAIN_MIN..DOMAIN_MAX).contains(&v));
        }
    }

    #[test]
    fn labeling_agrees_with_the_bowl() {
        assert_eq!(label_for(3.0, 5.0, 9.0), 1.0); // just above the peak
        assert_eq!(label_for(3.0, 5.0, 7.0), 0.0); // just below it
        assert_eq!(label_for(3.0, 5.0, 8.0), 0.0); // on the surface counts as below
    }
}

