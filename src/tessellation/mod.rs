mod tessellate_segment;

pub use tessellate_segment::TessellateSegment;

use crate::math::Point3;

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed deviation from the true geometry.
    pub tolerance: f64,
    /// Minimum number of line segments per curve.
    pub min_segments: usize,
    /// Maximum number of line segments per curve.
    pub max_segments: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            tolerance: 0.01,
            min_segments: 4,
            max_segments: 256,
        }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
    /// Curve parameter of each vertex.
    pub parameters: Vec<f64>,
}

impl Polyline {
    /// Number of line segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}
