use nalgebra::{Matrix3, Matrix4, Matrix4x3};

use crate::geometry::Segment;
use crate::math::{lerp, Point3};

/// Splits a segment at a parameter into two segments of the same degree.
///
/// Quadratic and cubic segments are cut with the subdivision basis
/// matrices: the left piece uses the lower-triangular matrix in powers of
/// `t` and `1 - t`, the right piece its mirrored upper-triangular
/// counterpart. Each matrix multiplies the control polygon with one column
/// per axis, which is the closed form of de Casteljau's construction.
pub struct Split {
    t: f64,
}

impl Split {
    /// Creates a new `Split` operation. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn new(t: f64) -> Self {
        Self {
            t: t.clamp(0.0, 1.0),
        }
    }

    /// Executes the split, returning `(left, right)`.
    #[must_use]
    pub fn execute(&self, segment: &Segment) -> (Segment, Segment) {
        let (start, end) = (*segment.start(), *segment.end());
        match *segment.control() {
            [] => {
                let cut = lerp(&start, &end, self.t);
                (Segment::linear(start, cut), Segment::linear(cut, end))
            }
            [c] => self.split_quadratic(&[start, c, end]),
            [c1, c2] => self.split_cubic(&[start, c1, c2, end]),
            _ => unreachable!("segment holds at most two control points"),
        }
    }

    fn split_quadratic(&self, points: &[Point3; 3]) -> (Segment, Segment) {
        let z = self.t;
        let s = 1.0 - z;
        #[rustfmt::skip]
        let left = Matrix3::new(
            1.0,   0.0,         0.0,
            s,     z,           0.0,
            s * s, 2.0 * s * z, z * z,
        );
        #[rustfmt::skip]
        let right = Matrix3::new(
            s * s, 2.0 * s * z, z * z,
            0.0,   s,           z,
            0.0,   0.0,         1.0,
        );
        let polygon = Matrix3::from_fn(|r, c| points[r][c]);

        let l = left * polygon;
        let r = right * polygon;
        let row = |m: &Matrix3<f64>, i: usize| Point3::new(m[(i, 0)], m[(i, 1)], m[(i, 2)]);
        (
            Segment::quadratic(row(&l, 0), row(&l, 1), row(&l, 2)),
            Segment::quadratic(row(&r, 0), row(&r, 1), row(&r, 2)),
        )
    }

    fn split_cubic(&self, points: &[Point3; 4]) -> (Segment, Segment) {
        let z = self.t;
        let s = 1.0 - z;
        let (s2, z2) = (s * s, z * z);
        #[rustfmt::skip]
        let left = Matrix4::new(
            1.0,        0.0,              0.0,              0.0,
            s,          z,                0.0,              0.0,
            s2,         2.0 * s * z,      z2,               0.0,
            s2 * s,     3.0 * s2 * z,     3.0 * s * z2,     z2 * z,
        );
        #[rustfmt::skip]
        let right = Matrix4::new(
            s2 * s,     3.0 * s2 * z,     3.0 * s * z2,     z2 * z,
            0.0,        s2,               2.0 * s * z,      z2,
            0.0,        0.0,              s,                z,
            0.0,        0.0,              0.0,              1.0,
        );
        let polygon = Matrix4x3::from_fn(|r, c| points[r][c]);

        let l = left * polygon;
        let r = right * polygon;
        let row = |m: &Matrix4x3<f64>, i: usize| Point3::new(m[(i, 0)], m[(i, 1)], m[(i, 2)]);
        (
            Segment::cubic(row(&l, 0), row(&l, 1), row(&l, 2), row(&l, 3)),
            Segment::cubic(row(&r, 0), row(&r, 1), row(&r, 2), row(&r, 3)),
        )
    }
}

impl Segment {
    /// Splits the segment at `t`, clamped to `[0, 1]`.
    ///
    /// See [`Split`].
    #[must_use]
    pub fn split(&self, t: f64) -> (Segment, Segment) {
        Split::new(t).execute(self)
    }
}
