use std::f64::consts::TAU;

use bytemuck::{Pod, Zeroable};
use glam::{DMat4, DQuat, DVec3};

use crate::particles::particle::Particle;
use crate::particles::pool::ParticlePool;

/// Per-instance rigid transform for one particle slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceTransform {
    pub position: DVec3,
    /// Uniform scale; 0 for dead slots, which renders them invisibly
    pub scale: f64,
    /// Spin around z, proportional to life progress and opposing the
    /// horizontal drift direction
    pub rotation_z: f64,
}

/// Column-major f32 model matrix for instanced-draw upload
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
}

impl InstanceTransform {
    /// Project one particle's state into its transform.
    ///
    /// `scale` was derived during the update pass as `1 - life_pct`, so the
    /// life progress is recovered from it rather than from the already
    /// incremented age.
    pub fn from_particle(p: &Particle) -> Self {
        let life_pct = 1.0 - p.scale;
        Self {
            position: p.position,
            scale: p.scale,
            rotation_z: life_pct * TAU * -p.velocity.x,
        }
    }

    /// Rigid transform matrix: translate · rotate-z · uniform-scale
    pub fn matrix(&self) -> DMat4 {
        DMat4::from_scale_rotation_translation(
            DVec3::splat(self.scale),
            DQuat::from_rotation_z(self.rotation_z),
            self.position,
        )
    }

    pub fn to_raw(&self) -> InstanceRaw {
        InstanceRaw {
            model: self.matrix().as_mat4().to_cols_array_2d(),
        }
    }
}

/// Projects pool state into one transform per slot, every tick.
///
/// Holds no semantic state; the internal Vec is reused scratch so steady
/// ticking does not reallocate. Dead slots are included with scale 0 rather
/// than tracked by a separate visibility flag.
#[derive(Debug, Default)]
pub struct InstanceTransformProducer {
    transforms: Vec<InstanceTransform>,
}

impl InstanceTransformProducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every slot's transform from current pool state
    pub fn produce(&mut self, pool: &ParticlePool) -> &[InstanceTransform] {
        self.transforms.clear();
        self.transforms
            .extend(pool.particles().iter().map(InstanceTransform::from_particle));
        &self.transforms
    }

    /// Upload-ready matrices for the most recent projection
    pub fn to_raw(&self) -> Vec<InstanceRaw> {
        self.transforms.iter().map(InstanceTransform::to_raw).collect()
    }
}
