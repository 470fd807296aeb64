use std::f64::consts::TAU;

use glam::DVec3;
use rand::Rng;

use crate::constants::surface::{PHASE_SPEED_BASE, PHASE_SPEED_SPREAD, WAVE_AMPLITUDE};
use crate::terrain::buffers::MeshBuffers;

/// Random wave parameters for one vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexPhase {
    /// Phase offset for the x oscillation, in [0, 2π)
    pub phase_x: f64,
    /// Phase offset for the height oscillation, in [0, 2π)
    pub phase_y: f64,
    /// Per-vertex wave speed multiplier
    pub speed: f64,
}

/// Animation side channel produced once per generation.
///
/// Holds the height-displaced rest positions and the random phases that
/// drive the per-tick surface wave. Owned next to the mesh buffers and
/// discarded with them on regeneration.
#[derive(Debug, Clone)]
pub struct AnimationSeed {
    pub original_positions: Vec<DVec3>,
    pub phases: Vec<VertexPhase>,
}

impl AnimationSeed {
    /// Draw one phase triple per vertex from `rng`
    pub fn generate(positions: &[DVec3], rng: &mut impl Rng) -> Self {
        let phases = positions
            .iter()
            .map(|_| VertexPhase {
                phase_x: TAU * rng.gen::<f64>(),
                phase_y: TAU * rng.gen::<f64>(),
                speed: PHASE_SPEED_BASE + PHASE_SPEED_SPREAD * (rng.gen::<f64>() - 0.5),
            })
            .collect();
        Self {
            original_positions: positions.to_vec(),
            phases,
        }
    }

    pub fn len(&self) -> usize {
        self.phases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Apply the surface wave for absolute time `time`.
    ///
    /// Each vertex oscillates around its rest position:
    /// `x = orig.x + 0.2 cos(t·speed + phase_x)`,
    /// `y = orig.y + 0.2 sin(t·speed + phase_y)`; z never moves. Offsets are
    /// computed from the rest positions, so re-applying the same `time` is a
    /// no-op and ticks never accumulate drift.
    pub fn displace(&self, buffers: &mut MeshBuffers, time: f64) {
        debug_assert_eq!(buffers.positions.len(), self.original_positions.len());
        for (i, position) in buffers.positions.iter_mut().enumerate() {
            let orig = self.original_positions[i];
            let phase = self.phases[i];
            position.x = orig.x + WAVE_AMPLITUDE * (time * phase.speed + phase.phase_x).cos();
            position.y = orig.y + WAVE_AMPLITUDE * (time * phase.speed + phase.phase_y).sin();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::descriptor::GridDescriptor;
    use crate::terrain::generator::GridMeshGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_mesh() -> crate::terrain::GeneratedMesh {
        let descriptor = GridDescriptor::square(10.0, 4).unwrap();
        GridMeshGenerator::new(9).generate(&descriptor, None)
    }

    #[test]
    fn test_phase_ranges() {
        let positions = vec![DVec3::ZERO; 200];
        let mut rng = StdRng::seed_from_u64(3);
        let seed = AnimationSeed::generate(&positions, &mut rng);
        for phase in &seed.phases {
            assert!(phase.phase_x >= 0.0 && phase.phase_x < TAU);
            assert!(phase.phase_y >= 0.0 && phase.phase_y < TAU);
            assert!(phase.speed >= 0.75 && phase.speed < 1.25);
        }
    }

    #[test]
    fn test_displace_is_idempotent_per_time() {
        let mut mesh = sample_mesh();
        mesh.seed.displace(&mut mesh.buffers, 1.7);
        let first = mesh.buffers.positions.clone();
        mesh.seed.displace(&mut mesh.buffers, 1.7);
        assert_eq!(mesh.buffers.positions, first);
    }

    #[test]
    fn test_displace_offsets_around_rest_positions() {
        let mut mesh = sample_mesh();
        mesh.seed.displace(&mut mesh.buffers, 0.0);
        for (i, p) in mesh.buffers.positions.iter().enumerate() {
            let orig = mesh.seed.original_positions[i];
            let phase = mesh.seed.phases[i];
            assert!((p.x - (orig.x + WAVE_AMPLITUDE * phase.phase_x.cos())).abs() < 1e-12);
            assert!((p.y - (orig.y + WAVE_AMPLITUDE * phase.phase_y.sin())).abs() < 1e-12);
            // z is never animated.
            assert_eq!(p.z, orig.z);
        }
    }

    #[test]
    fn test_displacement_is_bounded() {
        let mut mesh = sample_mesh();
        for step in 0..50 {
            mesh.seed.displace(&mut mesh.buffers, step as f64 * 0.16);
            for (p, orig) in mesh
                .buffers
                .positions
                .iter()
                .zip(&mesh.seed.original_positions)
            {
                assert!((p.x - orig.x).abs() <= WAVE_AMPLITUDE + 1e-12);
                assert!((p.y - orig.y).abs() <= WAVE_AMPLITUDE + 1e-12);
            }
        }
    }
}
