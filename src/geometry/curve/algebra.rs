//! Degree elevation and pointwise arithmetic on segments.
//!
//! Operands of different degree are elevated to the higher degree first, so
//! the result always represents the exact pointwise combination of the two
//! curves. Nothing here ever lowers a degree.

use std::ops::{Add, Mul, Neg, Sub};

use arrayvec::ArrayVec;

use crate::error::{OperationError, Result};
use crate::math::{Point3, Vector3};

use super::{Degree, Segment};

impl Segment {
    /// Re-expresses a linear segment as an equivalent quadratic one.
    ///
    /// A quadratic segment is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error for a cubic segment, which has no exact quadratic
    /// form in general.
    pub fn to_quadratic(&self) -> Result<Self> {
        if self.degree() == Degree::Cubic {
            return Err(OperationError::InvalidInput(
                "a cubic segment cannot be lowered to quadratic".into(),
            )
            .into());
        }
        Ok(self.elevate_to(Degree::Quadratic))
    }

    /// Re-expresses the segment as an equivalent cubic one.
    #[must_use]
    pub fn to_cubic(&self) -> Self {
        self.elevate_to(Degree::Cubic)
    }

    /// Elevates to `target`, or clones when already at or above it.
    fn elevate_to(&self, target: Degree) -> Self {
        let (s, e) = (self.start.coords, self.end.coords);
        let control: ArrayVec<Point3, 2> = match (self.control.as_slice(), target) {
            ([], Degree::Quadratic) => [Point3::from((s + e) * 0.5)].into_iter().collect(),
            ([], Degree::Cubic) => [
                Point3::from(s * (2.0 / 3.0) + e * (1.0 / 3.0)),
                Point3::from(s * (1.0 / 3.0) + e * (2.0 / 3.0)),
            ]
            .into(),
            ([c], Degree::Cubic) => [
                Point3::from(s * (1.0 / 3.0) + c.coords * (2.0 / 3.0)),
                Point3::from(c.coords * (2.0 / 3.0) + e * (1.0 / 3.0)),
            ]
            .into(),
            _ => return self.clone(),
        };
        Self::from_parts(self.start, control, self.end)
    }

    /// Pointwise sum, elevating the lower-degree operand first.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Pointwise difference, elevating the lower-degree operand first.
    #[must_use]
    pub fn minus(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Scales every control polygon point by `factor`.
    #[must_use]
    pub fn times(&self, factor: f64) -> Self {
        self.map_points(|p| Point3::from(p.coords * factor))
    }

    /// Applies `f` to start, each control point and end independently.
    pub(crate) fn map_points(&self, mut f: impl FnMut(&Point3) -> Point3) -> Self {
        let start = f(&self.start);
        let control = self.control.iter().map(&mut f).collect();
        let end = f(&self.end);
        Self::from_parts(start, control, end)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(Vector3, Vector3) -> Vector3) -> Self {
        let target = self.degree().max(other.degree());
        let a = self.elevate_to(target);
        let b = other.elevate_to(target);
        let combine = |p: &Point3, q: &Point3| Point3::from(f(p.coords, q.coords));
        let control = a
            .control
            .iter()
            .zip(b.control.iter())
            .map(|(p, q)| combine(p, q))
            .collect();
        Self::from_parts(combine(&a.start, &b.start), control, combine(&a.end, &b.end))
    }
}

impl Add for &Segment {
    type Output = Segment;

    fn add(self, rhs: Self) -> Segment {
        self.plus(rhs)
    }
}

impl Sub for &Segment {
    type Output = Segment;

    fn sub(self, rhs: Self) -> Segment {
        self.minus(rhs)
    }
}

impl Mul<f64> for &Segment {
    type Output = Segment;

    fn mul(self, rhs: f64) -> Segment {
        self.times(rhs)
    }
}

impl Neg for &Segment {
    type Output = Segment;

    fn neg(self) -> Segment {
        self.times(-1.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const SAMPLES: [f64; 6] = [0.0, 0.1, 0.33, 0.5, 0.77, 1.0];

    fn line() -> Segment {
        Segment::linear(Point3::new(1.0, 1.0, 0.0), Point3::new(4.0, -2.0, 3.0))
    }

    fn bump() -> Segment {
        Segment::quadratic(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
            Point3::new(2.0, 0.0, 1.0),
        )
    }

    fn arch() -> Segment {
        Segment::cubic(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        )
    }

    #[test]
    fn elevation_preserves_image() {
        let line = line();
        let bump = bump();
        let line_q = line.to_quadratic().unwrap();
        let line_c = line.to_cubic();
        let bump_c = bump.to_cubic();
        assert_eq!(line_q.degree(), Degree::Quadratic);
        assert_eq!(line_c.degree(), Degree::Cubic);
        for &t in &SAMPLES {
            assert_relative_eq!(line_q.position(t), line.position(t), epsilon = 1e-12);
            assert_relative_eq!(line_c.position(t), line.position(t), epsilon = 1e-12);
            assert_relative_eq!(bump_c.position(t), bump.position(t), epsilon = 1e-12);
        }
    }

    #[test]
    fn elevation_at_target_is_identity() {
        assert_eq!(bump().to_quadratic().unwrap(), bump());
        assert_eq!(arch().to_cubic(), arch());
    }

    #[test]
    fn cubic_cannot_be_lowered() {
        assert!(arch().to_quadratic().is_err());
    }

    #[test]
    fn plus_elevates_linear_to_cubic() {
        let sum = line().plus(&arch());
        assert_eq!(sum.degree(), Degree::Cubic);
        assert_eq!(sum.control().len(), 2);
        for &t in &SAMPLES {
            let expected = line().position(t).coords + arch().position(t).coords;
            assert_relative_eq!(sum.position(t).coords, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn minus_is_antisymmetric() {
        let a = bump();
        let b = arch();
        let d1 = &a - &b;
        let d2 = -&(&b - &a);
        for &t in &SAMPLES {
            assert_relative_eq!(d1.position(t), d2.position(t), epsilon = 1e-12);
        }
    }

    #[test]
    fn same_degree_sum_is_pointwise() {
        let sum = &bump() + &bump();
        assert_eq!(sum, bump().times(2.0));
    }

    #[test]
    fn scaling_scales_positions() {
        let scaled = &arch() * 0.5;
        for &t in &SAMPLES {
            assert_relative_eq!(
                scaled.position(t).coords,
                arch().position(t).coords * 0.5,
                epsilon = 1e-12
            );
        }
    }
}
