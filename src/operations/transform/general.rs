use nalgebra::Vector4;

use crate::geometry::Segment;
use crate::math::{Matrix4, Point3};

/// Applies an arbitrary 4x4 transformation matrix to a segment.
///
/// Start, end and every control point are mapped as points (homogeneous
/// `w = 1`, then divided by the resulting `w`), so affine and projective
/// matrices are both accepted and the degree is preserved. A resulting
/// `w` of zero yields non-finite coordinates.
pub struct GeneralTransform {
    matrix: Matrix4,
}

impl GeneralTransform {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(matrix: Matrix4) -> Self {
        Self { matrix }
    }

    /// Executes the transformation, returning the transformed segment.
    #[must_use]
    pub fn execute(&self, segment: &Segment) -> Segment {
        segment.map_points(|p| transform_point(&self.matrix, p))
    }
}

/// Transforms a point by a 4x4 matrix (homogeneous coordinates).
pub(crate) fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x / v.w, v.y / v.w, v.z / v.w)
}

impl Segment {
    /// Returns the segment mapped through `matrix`.
    ///
    /// See [`GeneralTransform`].
    #[must_use]
    pub fn transform(&self, matrix: &Matrix4) -> Segment {
        GeneralTransform::new(*matrix).execute(self)
    }
}
