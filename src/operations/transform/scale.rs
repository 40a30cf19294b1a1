use crate::geometry::Segment;
use crate::math::{Matrix4, Point3};

use super::GeneralTransform;

/// Scales a segment uniformly from a center point.
pub struct Scale {
    center: Point3,
    factor: f64,
}

impl Scale {
    /// Creates a new `Scale` operation.
    #[must_use]
    pub fn new(center: Point3, factor: f64) -> Self {
        Self { center, factor }
    }

    /// Executes the scaling, returning the scaled segment.
    #[must_use]
    pub fn execute(&self, segment: &Segment) -> Segment {
        let matrix = Matrix4::new_translation(&self.center.coords)
            * Matrix4::new_scaling(self.factor)
            * Matrix4::new_translation(&(-self.center.coords));
        GeneralTransform::new(matrix).execute(segment)
    }
}
