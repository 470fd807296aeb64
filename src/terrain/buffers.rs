use bytemuck::{Pod, Zeroable};
use glam::{DVec2, DVec3};

/// One grid vertex, assembled from the parallel attribute arrays
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: DVec3,
    /// Unit length after normal smoothing
    pub normal: DVec3,
    /// RGB in [0, 1]
    pub color: DVec3,
    /// Normalized grid fractions in [0, 1]
    pub uv: DVec2,
}

/// Interleaved f32 vertex for upload to a rendering backend
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct RenderVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

/// Geometry buffers for one generated grid.
///
/// Attributes are stored as parallel arrays indexed 0..vertex_count;
/// `indices` holds triangle-vertex-index triples. Every index is less than
/// `vertex_count`, and for a grid of `seg_w` x `seg_h` cells
/// `vertex_count == (seg_w + 1) * (seg_h + 1)` and
/// `indices.len() == seg_w * seg_h * 6`.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    pub positions: Vec<DVec3>,
    pub normals: Vec<DVec3>,
    pub colors: Vec<DVec3>,
    pub uvs: Vec<DVec2>,
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            colors: Vec::with_capacity(vertex_count),
            uvs: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append one vertex to all four attribute arrays
    pub fn push_vertex(&mut self, vertex: Vertex) {
        self.positions.push(vertex.position);
        self.normals.push(vertex.normal);
        self.colors.push(vertex.color);
        self.uvs.push(vertex.uv);
    }

    /// Assemble the vertex at `index` from the parallel arrays
    pub fn vertex(&self, index: usize) -> Vertex {
        Vertex {
            position: self.positions[index],
            normal: self.normals[index],
            color: self.colors[index],
            uv: self.uvs[index],
        }
    }

    /// Fill the color attribute with a single RGB value for every vertex
    pub fn fill_color(&mut self, color: DVec3) {
        self.colors.fill(color);
    }

    /// Flattened f32 positions (x, y, z per vertex) for upload
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten3(&self.positions)
    }

    /// Flattened f32 normals for upload
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Flattened f32 colors for upload
    pub fn colors_f32(&self) -> Vec<f32> {
        flatten3(&self.colors)
    }

    /// Flattened f32 uvs (u, v per vertex) for upload
    pub fn uvs_f32(&self) -> Vec<f32> {
        self.uvs
            .iter()
            .flat_map(|uv| [uv.x as f32, uv.y as f32])
            .collect()
    }

    /// Interleaved f32 vertices for upload as a single buffer
    pub fn render_vertices(&self) -> Vec<RenderVertex> {
        (0..self.vertex_count())
            .map(|i| RenderVertex {
                position: self.positions[i].as_vec3().to_array(),
                normal: self.normals[i].as_vec3().to_array(),
                color: self.colors[i].as_vec3().to_array(),
                uv: self.uvs[i].as_vec2().to_array(),
            })
            .collect()
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    values
        .iter()
        .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_buffers() -> MeshBuffers {
        let mut buffers = MeshBuffers::with_capacity(2, 0);
        buffers.push_vertex(Vertex {
            position: DVec3::new(1.0, 2.0, 3.0),
            normal: DVec3::Y,
            color: DVec3::ONE,
            uv: DVec2::new(0.5, 0.25),
        });
        buffers.push_vertex(Vertex {
            position: DVec3::new(-1.0, 0.0, 4.0),
            normal: DVec3::Y,
            color: DVec3::new(0.2, 0.5, 1.0),
            uv: DVec2::ONE,
        });
        buffers
    }

    #[test]
    fn test_parallel_arrays_stay_in_step() {
        let buffers = sample_buffers();
        assert_eq!(buffers.vertex_count(), 2);
        assert_eq!(buffers.normals.len(), 2);
        assert_eq!(buffers.colors.len(), 2);
        assert_eq!(buffers.uvs.len(), 2);

        let v = buffers.vertex(1);
        assert_eq!(v.position, DVec3::new(-1.0, 0.0, 4.0));
        assert_eq!(v.uv, DVec2::ONE);
    }

    #[test]
    fn test_flattened_views() {
        let buffers = sample_buffers();
        assert_eq!(buffers.positions_f32().len(), 6);
        assert_eq!(buffers.uvs_f32().len(), 4);
        assert_eq!(buffers.positions_f32()[..3], [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_render_vertices_interleave() {
        let buffers = sample_buffers();
        let verts = buffers.render_vertices();
        assert_eq!(verts.len(), 2);
        assert_eq!(verts[0].position, [1.0, 2.0, 3.0]);
        assert_eq!(verts[1].color, [0.2, 0.5, 1.0]);
        assert_eq!(std::mem::size_of::<RenderVertex>(), 11 * 4);
    }

    #[test]
    fn test_fill_color() {
        let mut buffers = sample_buffers();
        buffers.fill_color(DVec3::new(0.2, 0.5, 1.0));
        assert!(buffers.colors.iter().all(|c| *c == DVec3::new(0.2, 0.5, 1.0)));
    }
}
