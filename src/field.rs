//! Position and velocity buffers of the point cloud.

use rand::Rng;

/// A fixed number of independently drifting points.
///
/// Both buffers hold `count * 3` floats laid out `x, y, z` per particle and
/// are never resized. `positions` is uploaded to the GPU verbatim.
#[derive(Debug, Clone)]
pub struct ParticleField {
    count: usize,
    positions: Vec<f32>,
    velocities: Vec<f32>,
}

impl ParticleField {
    /// Scatter `count` particles uniformly in `[-spread, spread]^3` with
    /// per-axis velocities uniform in `[-max_speed, max_speed]`.
    pub fn generate<R: Rng>(count: usize, spread: f32, max_speed: f32, rng: &mut R) -> Self {
        let mut positions = Vec::with_capacity(count * 3);
        let mut velocities = Vec::with_capacity(count * 3);
        for _ in 0..count {
            for _ in 0..3 {
                positions.push(rng.random_range(-spread..=spread));
            }
            for _ in 0..3 {
                velocities.push(rng.random_range(-max_speed..=max_speed));
            }
        }
        Self { count, positions, velocities }
    }

    /// Build a field from explicit buffers. Returns `None` when the lengths
    /// do not describe whole particles or disagree with each other.
    pub fn from_buffers(positions: Vec<f32>, velocities: Vec<f32>) -> Option<Self> {
        if positions.len() % 3 != 0 || positions.len() != velocities.len() {
            return None;
        }
        Some(Self { count: positions.len() / 3, positions, velocities })
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn velocities(&self) -> &[f32] {
        &self.velocities
    }

    /// Position of particle `i` as `[x, y, z]`.
    pub fn position(&self, i: usize) -> [f32; 3] {
        let i3 = i * 3;
        [self.positions[i3], self.positions[i3 + 1], self.positions[i3 + 2]]
    }

    /// Move every particle by its velocity, then wrap it in depth.
    ///
    /// Wrapping only touches z: a particle past `camera_z + margin` moves back
    /// by `span`, then one short of `camera_z - margin` moves forward by
    /// `span`. Both checks run in that order on the same step.
    pub fn advance(&mut self, camera_z: f32, margin: f32, span: f32) {
        let far = camera_z + margin;
        let near = camera_z - margin;
        for (p, v) in self
            .positions
            .chunks_exact_mut(3)
            .zip(self.velocities.chunks_exact(3))
        {
            p[0] += v[0];
            p[1] += v[1];
            p[2] += v[2];

            if p[2] > far {
                p[2] -= span;
            }
            if p[2] < near {
                p[2] += span;
            }
        }
    }
}
