use glam::{DVec2, DVec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::constants::surface::HEIGHT_AMPLITUDE;
use crate::terrain::animation::AnimationSeed;
use crate::terrain::buffers::{MeshBuffers, Vertex};
use crate::terrain::descriptor::GridDescriptor;
use crate::terrain::normals::NormalAccumulator;
use crate::terrain::sampler::NoiseSampler;

/// One generation result: render buffers plus the animation side channel.
///
/// The side channel (original heights, per-vertex wave phases) is owned
/// alongside the buffers, never bolted onto them. Regeneration is
/// all-or-nothing: a new `GeneratedMesh` replaces the old one wholesale.
#[derive(Debug, Clone)]
pub struct GeneratedMesh {
    pub buffers: MeshBuffers,
    pub seed: AnimationSeed,
}

/// Builds rectangular grid meshes with smoothed normals.
///
/// Geometry is a pure function of the descriptor and the noise sampler; the
/// generator's RNG only feeds the random-phase side channel, so regenerating
/// with the same inputs always reproduces the same positions and normals.
pub struct GridMeshGenerator {
    amplitude: f64,
    rng: StdRng,
}

impl GridMeshGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            amplitude: HEIGHT_AMPLITUDE,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Override the amplitude applied to raw noise samples
    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Generate a centered grid of `seg_w` x `seg_h` cells.
    ///
    /// With a sampler installed, vertex height is
    /// `amplitude * sampler.sample(x, z)`; without one the grid is flat.
    pub fn generate(
        &mut self,
        descriptor: &GridDescriptor,
        sampler: Option<&dyn NoiseSampler>,
    ) -> GeneratedMesh {
        let seg_w = descriptor.clamped_seg_w();
        let seg_h = descriptor.clamped_seg_h();
        let num_vtx_row = seg_w + 1;

        let mut buffers =
            MeshBuffers::with_capacity(descriptor.vertex_count(), descriptor.index_count());

        for seg_y in 0..=seg_h {
            for seg_x in 0..=seg_w {
                let pct_x = seg_x as f64 / seg_w as f64;
                let pct_y = seg_y as f64 / seg_h as f64;
                let x = -descriptor.width * 0.5 + pct_x * descriptor.width;
                let z = -descriptor.height * 0.5 + pct_y * descriptor.height;
                let y = match sampler {
                    Some(s) => self.amplitude * s.sample(x, z),
                    None => 0.0,
                };
                buffers.push_vertex(Vertex {
                    position: DVec3::new(x, y, z),
                    normal: DVec3::ZERO,
                    color: DVec3::ONE,
                    uv: DVec2::new(pct_x, pct_y),
                });
            }
        }

        // Every cell produces two triangles; skipping the last row or column
        // of cells is a defect, not a variant.
        let mut accumulator = NormalAccumulator::new(buffers.vertex_count());
        for seg_y in 0..seg_h {
            for seg_x in 0..seg_w {
                let a = seg_x + seg_y * num_vtx_row;
                let b = (seg_x + 1) + seg_y * num_vtx_row;
                let c = (seg_x + 1) + (seg_y + 1) * num_vtx_row;
                let d = seg_x + (seg_y + 1) * num_vtx_row;
                for triangle in [[a, c, b], [a, d, c]] {
                    buffers.indices.extend_from_slice(&triangle);
                    let normal = face_normal(
                        buffers.positions[triangle[0] as usize],
                        buffers.positions[triangle[1] as usize],
                        buffers.positions[triangle[2] as usize],
                    );
                    accumulator.add_face(normal, triangle);
                }
            }
        }
        buffers.normals = accumulator.finish();

        let seed = AnimationSeed::generate(&buffers.positions, &mut self.rng);

        log::debug!(
            "generated {}x{} grid: {} vertices, {} triangles",
            seg_w,
            seg_h,
            buffers.vertex_count(),
            buffers.triangle_count()
        );

        GeneratedMesh { buffers, seed }
    }
}

/// Normalized cross product of two edges anchored at `p0`.
///
/// Degenerate triangles yield the zero vector, which the accumulator's
/// normalization guard absorbs.
fn face_normal(p0: DVec3, p1: DVec3, p2: DVec3) -> DVec3 {
    (p1 - p0).cross(p2 - p0).normalize_or_zero()
}
