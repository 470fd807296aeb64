use glam::DVec3;

/// Smooths per-face normals into per-vertex normals.
///
/// Each face normal is added unweighted to the running sum of the three
/// vertices it touches; a vertex shared by adjacent triangles accumulates
/// every contribution before normalization. No area or angle weighting.
pub struct NormalAccumulator {
    sums: Vec<DVec3>,
}

impl NormalAccumulator {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            sums: vec![DVec3::ZERO; vertex_count],
        }
    }

    /// Add one face's normal to the sums of the three vertices it touches
    pub fn add_face(&mut self, face_normal: DVec3, vertices: [u32; 3]) {
        for index in vertices {
            self.sums[index as usize] += face_normal;
        }
    }

    /// Normalize every accumulated sum.
    ///
    /// A zero-length sum (isolated vertex, or perfectly canceling faces)
    /// falls back to +Y instead of producing a non-finite normal.
    pub fn finish(self) -> Vec<DVec3> {
        self.sums
            .into_iter()
            .map(|sum| sum.try_normalize().unwrap_or(DVec3::Y))
            .collect()
    }
}
