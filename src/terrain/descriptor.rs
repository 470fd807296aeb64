use serde::{Deserialize, Serialize};

use crate::constants::surface::MIN_SEGMENTS;
use crate::error::{WavefieldError, WavefieldResult};

/// Parameters for one grid generation request.
///
/// A control surface (GUI sliders, CLI flags) holds its own mutable copy of
/// these values and hands the generator a fresh descriptor on every change;
/// the generator never shares state with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridDescriptor {
    /// World-space extent along x, centered on the origin
    pub width: f64,
    /// World-space extent along z, centered on the origin
    pub height: f64,
    /// Cell count along x, clamped to at least 1
    pub seg_w: u32,
    /// Cell count along z, clamped to at least 1
    pub seg_h: u32,
}

impl GridDescriptor {
    /// Validated constructor. Dimensions must be positive and finite;
    /// segment counts are clamped to a minimum of 1, never rejected.
    pub fn new(width: f64, height: f64, seg_w: u32, seg_h: u32) -> WavefieldResult<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(WavefieldError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            seg_w: seg_w.max(MIN_SEGMENTS),
            seg_h: seg_h.max(MIN_SEGMENTS),
        })
    }

    /// Square grid with the same segment count on both axes
    pub fn square(size: f64, segments: u32) -> WavefieldResult<Self> {
        Self::new(size, size, segments, segments)
    }

    /// Segment count along x after clamping
    pub fn clamped_seg_w(&self) -> u32 {
        self.seg_w.max(MIN_SEGMENTS)
    }

    /// Segment count along z after clamping
    pub fn clamped_seg_h(&self) -> u32 {
        self.seg_h.max(MIN_SEGMENTS)
    }

    /// Number of vertices the grid will contain: (seg_w + 1) * (seg_h + 1)
    pub fn vertex_count(&self) -> usize {
        (self.clamped_seg_w() as usize + 1) * (self.clamped_seg_h() as usize + 1)
    }

    /// Number of triangle indices the grid will contain: seg_w * seg_h * 6
    pub fn index_count(&self) -> usize {
        self.clamped_seg_w() as usize * self.clamped_seg_h() as usize * 6
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_nonpositive_dimensions() {
        assert!(GridDescriptor::new(0.0, 10.0, 2, 2).is_err());
        assert!(GridDescriptor::new(10.0, -1.0, 2, 2).is_err());
        assert!(GridDescriptor::new(f64::NAN, 10.0, 2, 2).is_err());
        assert!(GridDescriptor::new(f64::INFINITY, 10.0, 2, 2).is_err());
    }

    #[test]
    fn test_clamps_zero_segments() {
        let desc = GridDescriptor::new(10.0, 10.0, 0, 0).unwrap();
        assert_eq!(desc.seg_w, 1);
        assert_eq!(desc.seg_h, 1);
        assert_eq!(desc.vertex_count(), 4);
        assert_eq!(desc.index_count(), 6);
    }

    #[test]
    fn test_counts() {
        let desc = GridDescriptor::new(10.0, 10.0, 2, 2).unwrap();
        assert_eq!(desc.vertex_count(), 9);
        assert_eq!(desc.index_count(), 24);

        let desc = GridDescriptor::new(50.0, 25.0, 20, 10).unwrap();
        assert_eq!(desc.vertex_count(), 21 * 11);
        assert_eq!(desc.index_count(), 20 * 10 * 6);
    }

    #[test]
    fn test_serde_round_trip() {
        let desc = GridDescriptor::square(10.0, 20).unwrap();
        let json = serde_json::to_string(&desc).unwrap();
        let back: GridDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(desc, back);
    }
}
