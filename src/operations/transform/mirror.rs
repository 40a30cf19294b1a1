use nalgebra::Matrix3;

use crate::error::{OperationError, Result};
use crate::geometry::Segment;
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};

use super::GeneralTransform;

/// Mirrors a segment across a plane defined by a point and normal.
///
/// The mirrored segment keeps its parameter direction: `start` maps to the
/// new `start`.
pub struct Mirror {
    plane_origin: Point3,
    plane_normal: Vector3,
}

impl Mirror {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(plane_origin: Point3, plane_normal: Vector3) -> Self {
        Self {
            plane_origin,
            plane_normal,
        }
    }

    /// Executes the mirror, returning the reflected segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the plane normal is zero-length.
    pub fn execute(&self, segment: &Segment) -> Result<Segment> {
        let len = self.plane_normal.norm();
        if len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("mirror plane normal must be non-zero".into()).into(),
            );
        }
        let n = self.plane_normal / len;

        // Householder reflection I - 2nn^T about the plane through the origin.
        let reflect = (Matrix3::identity() - n * n.transpose() * 2.0).to_homogeneous();

        let t_neg = Matrix4::new_translation(&(-self.plane_origin.coords));
        let t_pos = Matrix4::new_translation(&self.plane_origin.coords);

        Ok(GeneralTransform::new(t_pos * reflect * t_neg).execute(segment))
    }
}
