use crate::error::{OperationError, Result};
use crate::geometry::Segment;
use crate::math::{Matrix4, Point3, Vector3, TOLERANCE};

use super::GeneralTransform;

/// Rotates a segment around an axis.
pub struct Rotate {
    axis_origin: Point3,
    axis_direction: Vector3,
    angle: f64,
}

impl Rotate {
    /// Creates a new `Rotate` operation.
    ///
    /// * `angle` - Rotation angle in radians.
    #[must_use]
    pub fn new(axis_origin: Point3, axis_direction: Vector3, angle: f64) -> Self {
        Self {
            axis_origin,
            axis_direction,
            angle,
        }
    }

    /// Executes the rotation, returning the rotated segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the axis direction is zero-length.
    pub fn execute(&self, segment: &Segment) -> Result<Segment> {
        let len = self.axis_direction.norm();
        if len < TOLERANCE {
            return Err(
                OperationError::InvalidInput("rotation axis must be non-zero".into()).into(),
            );
        }
        let axis = self.axis_direction / len;

        let t_neg = Matrix4::new_translation(&(-self.axis_origin.coords));
        let rot = rotation_matrix(&axis, self.angle);
        let t_pos = Matrix4::new_translation(&self.axis_origin.coords);

        Ok(GeneralTransform::new(t_pos * rot * t_neg).execute(segment))
    }
}

/// Builds a 4x4 rotation matrix around a unit axis by an angle (Rodrigues).
#[allow(clippy::many_single_char_names, clippy::suspicious_operation_groupings)]
#[rustfmt::skip]
fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix4 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    Matrix4::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, 0.0,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, 0.0,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rotate_90_around_z() {
        let seg = Segment::quadratic(
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(2.0, 1.0, 0.0),
            Point3::new(3.0, 0.0, 0.0),
        );
        let rotated = Rotate::new(Point3::origin(), Vector3::z(), FRAC_PI_2)
            .execute(&seg)
            .unwrap();
        assert_relative_eq!(*rotated.start(), Point3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(rotated.control()[0], Point3::new(-1.0, 2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(rotated.length(), seg.length(), epsilon = 1e-9);
    }

    #[test]
    fn rotate_about_offset_axis() {
        let seg = Segment::linear(Point3::new(2.0, 1.0, 0.0), Point3::new(3.0, 1.0, 0.0));
        let rotated = Rotate::new(Point3::new(1.0, 1.0, 0.0), Vector3::z(), FRAC_PI_2)
            .execute(&seg)
            .unwrap();
        assert_relative_eq!(*rotated.start(), Point3::new(1.0, 2.0, 0.0), epsilon = 1e-12);
        assert_relative_eq!(*rotated.end(), Point3::new(1.0, 3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn zero_axis_is_rejected() {
        let seg = Segment::linear(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
        assert!(Rotate::new(Point3::origin(), Vector3::zeros(), 1.0)
            .execute(&seg)
            .is_err());
    }
}
