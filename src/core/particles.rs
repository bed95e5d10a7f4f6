use glam::{Mat4, Vec3};
use rand::prelude::*;

/// Fixed-size cloud of drifting points wrapped at a bounding cube.
///
/// Positions advance by one velocity step per tick; a coordinate that leaves
/// the cube re-enters from the opposite face carrying its overflow, so the
/// motion is a teleport rather than a bounce and velocities are never
/// mutated after init.
pub struct ParticleField {
    positions: Vec<Vec3>,
    velocities: Vec<Vec3>,
    bounds: f32,
    // Whole-field orientation drift; unbounded, only sin/cos are consumed.
    yaw: f32,
    pitch: f32,
    yaw_per_tick: f32,
    pitch_per_tick: f32,
}

impl ParticleField {
    pub fn new(
        count: usize,
        bounds: f32,
        velocity_scale: f32,
        yaw_per_tick: f32,
        pitch_per_tick: f32,
        seed: u64,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut uniform = |half: f32| (rng.gen::<f32>() * 2.0 - 1.0) * half;
        let mut positions = Vec::with_capacity(count);
        let mut velocities = Vec::with_capacity(count);
        for _ in 0..count {
            positions.push(Vec3::new(
                uniform(bounds),
                uniform(bounds),
                uniform(bounds),
            ));
            velocities.push(Vec3::new(
                uniform(velocity_scale),
                uniform(velocity_scale),
                uniform(velocity_scale),
            ));
        }
        Self {
            positions,
            velocities,
            bounds,
            yaw: 0.0,
            pitch: 0.0,
            yaw_per_tick,
            pitch_per_tick,
        }
    }

    /// Build a field with caller-supplied particles, for deterministic tests
    /// and debug layouts.
    pub fn from_parts(positions: Vec<Vec3>, velocities: Vec<Vec3>, bounds: f32) -> Self {
        debug_assert_eq!(positions.len(), velocities.len());
        Self {
            positions,
            velocities,
            bounds,
            yaw: 0.0,
            pitch: 0.0,
            yaw_per_tick: 0.0,
            pitch_per_tick: 0.0,
        }
    }

    /// One simulation step: integrate velocities, wrap at the cube faces,
    /// accumulate the cosmetic orientation drift.
    pub fn advance(&mut self) {
        let b = self.bounds;
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter()) {
            *p += *v;
            for axis in 0..3 {
                if p[axis] > b {
                    p[axis] -= 2.0 * b;
                } else if p[axis] < -b {
                    p[axis] += 2.0 * b;
                }
            }
        }
        self.yaw += self.yaw_per_tick;
        self.pitch += self.pitch_per_tick;
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn bounds(&self) -> f32 {
        self.bounds
    }

    /// Position buffer for the renderer upload.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// World transform carrying the accumulated drift.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.pitch) * Mat4::from_rotation_y(self.yaw)
    }
}
