// crates/obstacle_spawner/src/rng.rs
//! Seedable randomness for spawn timing and placement.

use std::f32::consts::TAU;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Random source shared by the timer and the placer. Seed it for
/// reproducible runs.
#[derive(Clone, Debug)]
pub struct SpawnRng {
    rng: ChaCha8Rng,
    // Box-Muller yields two independent normals per draw; the cosine half is
    // kept for the next call.
    spare_normal: Option<f32>,
}

impl SpawnRng {
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            spare_normal: None,
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            spare_normal: None,
        }
    }

    /// Uniform in `[0, 1)`.
    pub fn unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    /// Uniform in `[min, max]`. Requires `min <= max`.
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        if min == max {
            return min;
        }
        self.rng.gen_range(min..=max)
    }

    pub fn random_bool(&mut self) -> bool {
        self.unit() >= 0.5
    }

    /// `true` with probability `p` (clamped to `[0, 1]`).
    pub fn chance(&mut self, p: f32) -> bool {
        self.unit() < p
    }

    pub fn random_normal(&mut self, mean: f32, std: f32) -> f32 {
        let z = match self.spare_normal.take() {
            Some(z) => z,
            None => {
                // Shift into (0, 1] so ln never sees zero.
                let u1 = 1.0 - self.unit();
                let u2 = 1.0 - self.unit();
                let radius = (-2.0 * u1.ln()).sqrt();
                let (sin, cos) = (TAU * u2).sin_cos();
                self.spare_normal = Some(radius * cos);
                radius * sin
            }
        };
        mean + std * z
    }
}
