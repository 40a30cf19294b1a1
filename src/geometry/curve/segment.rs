use std::fmt;
use std::iter;
use std::sync::OnceLock;

use arrayvec::ArrayVec;

use crate::error::{GeometryError, Result};
use crate::math::{lerp, Point3, Vector3, TOLERANCE};

use super::lut::LutCache;
use super::{Curve, CurveDomain};

/// Polynomial degree of a [`Segment`], implied by its control point count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Degree {
    /// Straight segment, no control points.
    Linear,
    /// One control point.
    Quadratic,
    /// Two control points.
    Cubic,
}

impl Degree {
    /// Maps a control point count to a degree.
    #[must_use]
    pub fn from_control_count(count: usize) -> Option<Self> {
        match count {
            0 => Some(Self::Linear),
            1 => Some(Self::Quadratic),
            2 => Some(Self::Cubic),
            _ => None,
        }
    }

    /// Number of interior control points.
    #[must_use]
    pub fn control_count(self) -> usize {
        match self {
            Self::Linear => 0,
            Self::Quadratic => 1,
            Self::Cubic => 2,
        }
    }

    /// Polynomial order of the Bernstein basis (1, 2 or 3).
    #[must_use]
    pub fn order(self) -> usize {
        self.control_count() + 1
    }
}

/// A single Bezier curve segment in 3D space.
///
/// Holds a start point, zero to two interior control points and an end
/// point. The parametric form is the Bernstein polynomial of the matching
/// order over `t ∈ [0, 1]`.
///
/// A segment never changes after construction. The lookup table and the
/// total length are memoized on first use; neither takes part in equality.
pub struct Segment {
    pub(super) start: Point3,
    pub(super) control: ArrayVec<Point3, 2>,
    pub(super) end: Point3,
    pub(super) lut: LutCache,
    pub(super) length: OnceLock<f64>,
}

impl Segment {
    pub(crate) fn from_parts(start: Point3, control: ArrayVec<Point3, 2>, end: Point3) -> Self {
        Self {
            start,
            control,
            end,
            lut: LutCache::default(),
            length: OnceLock::new(),
        }
    }

    /// Creates a straight segment.
    #[must_use]
    pub fn linear(start: Point3, end: Point3) -> Self {
        Self::from_parts(start, ArrayVec::new(), end)
    }

    /// Creates a quadratic segment with one control point.
    #[must_use]
    pub fn quadratic(start: Point3, control: Point3, end: Point3) -> Self {
        Self::from_parts(start, iter::once(control).collect(), end)
    }

    /// Creates a cubic segment with two control points.
    #[must_use]
    pub fn cubic(start: Point3, control1: Point3, control2: Point3, end: Point3) -> Self {
        Self::from_parts(start, [control1, control2].into(), end)
    }

    /// Creates a segment from endpoints and a list of control points.
    ///
    /// # Errors
    ///
    /// Returns an error unless `control` holds 0, 1 or 2 points.
    pub fn new(start: Point3, control: &[Point3], end: Point3) -> Result<Self> {
        if Degree::from_control_count(control.len()).is_none() {
            return Err(GeometryError::InvalidControlCount {
                count: control.len(),
            }
            .into());
        }
        Ok(Self::from_parts(
            start,
            control.iter().copied().collect(),
            end,
        ))
    }

    /// Creates a segment from its full control polygon, start and end included.
    ///
    /// # Errors
    ///
    /// Returns an error unless `points` holds 2, 3 or 4 points.
    pub fn from_points(points: &[Point3]) -> Result<Self> {
        match points {
            [start, control @ .., end] if control.len() <= 2 => {
                Self::new(*start, control, *end)
            }
            _ => Err(GeometryError::InvalidPointCount {
                count: points.len(),
            }
            .into()),
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns the interior control points in order.
    #[must_use]
    pub fn control(&self) -> &[Point3] {
        &self.control
    }

    /// Returns the degree implied by the control point count.
    #[must_use]
    pub fn degree(&self) -> Degree {
        match self.control.len() {
            0 => Degree::Linear,
            1 => Degree::Quadratic,
            _ => Degree::Cubic,
        }
    }

    /// Iterates the full control polygon: start, control points, end.
    pub fn points(&self) -> impl Iterator<Item = &Point3> {
        iter::once(&self.start)
            .chain(self.control.iter())
            .chain(iter::once(&self.end))
    }

    /// Evaluates the position at `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn position(&self, t: f64) -> Point3 {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        match self.control.as_slice() {
            [] => lerp(&self.start, &self.end, t),
            [c] => Point3::from(
                self.start.coords * (s * s) + c.coords * (2.0 * s * t) + self.end.coords * (t * t),
            ),
            [c1, c2] => Point3::from(
                self.start.coords * (s * s * s)
                    + c1.coords * (3.0 * s * s * t)
                    + c2.coords * (3.0 * s * t * t)
                    + self.end.coords * (t * t * t),
            ),
            _ => unreachable!("segment holds at most two control points"),
        }
    }

    /// First derivative with respect to `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn derivative(&self, t: f64) -> Vector3 {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;
        match self.control.as_slice() {
            [] => self.end - self.start,
            // B'(t) = 2(1-t)(P1-P0) + 2t(P2-P1)
            [c] => (c - self.start) * (2.0 * s) + (self.end - c) * (2.0 * t),
            // B'(t) = 3(1-t)^2(P1-P0) + 6(1-t)t(P2-P1) + 3t^2(P3-P2)
            [c1, c2] => {
                (c1 - self.start) * (3.0 * s * s)
                    + (c2 - c1) * (6.0 * s * t)
                    + (self.end - c2) * (3.0 * t * t)
            }
            _ => unreachable!("segment holds at most two control points"),
        }
    }

    /// Second derivative with respect to `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn derivative2(&self, t: f64) -> Vector3 {
        let t = t.clamp(0.0, 1.0);
        match self.control.as_slice() {
            [] => Vector3::zeros(),
            [c] => (self.end.coords - c.coords * 2.0 + self.start.coords) * 2.0,
            [c1, c2] => {
                let a = self.start.coords - c1.coords * 2.0 + c2.coords;
                let b = c1.coords - c2.coords * 2.0 + self.end.coords;
                (a * (1.0 - t) + b * t) * 6.0
            }
            _ => unreachable!("segment holds at most two control points"),
        }
    }

    /// Curvature `|B' x B''| / |B'|^3` at `t`.
    ///
    /// Not finite at a cusp where the first derivative vanishes.
    #[must_use]
    pub fn curvature(&self, t: f64) -> f64 {
        let d1 = self.derivative(t);
        let d2 = self.derivative2(t);
        d1.cross(&d2).norm() / d1.norm().powi(3)
    }

    /// Unit principal normal at `t`.
    ///
    /// On straight stretches, where the second derivative has no component
    /// across the tangent, an arbitrary perpendicular of the tangent is used.
    #[must_use]
    pub fn normal(&self, t: f64) -> Vector3 {
        let tangent = self.derivative(t).normalize();
        let d2 = self.derivative2(t);
        let normal = d2 - tangent * tangent.dot(&d2);
        let len = normal.norm();
        if len > TOLERANCE {
            normal / len
        } else {
            any_perpendicular(&tangent)
        }
    }

    /// Derivative control polygons, one level per differentiation.
    ///
    /// Level `k` holds the control vectors of the `(k + 1)`-th derivative,
    /// each level one entry shorter than the previous.
    #[must_use]
    pub fn d_points(&self) -> Vec<Vec<Vector3>> {
        let mut levels: Vec<Vec<Vector3>> = Vec::with_capacity(self.degree().order());
        let mut current: Vec<Vector3> = self.points().map(|p| p.coords).collect();
        while current.len() > 1 {
            #[allow(clippy::cast_precision_loss)]
            let scale = (current.len() - 1) as f64;
            let next: Vec<Vector3> = current
                .windows(2)
                .map(|w| (w[1] - w[0]) * scale)
                .collect();
            levels.push(next.clone());
            current = next;
        }
        levels
    }

    /// Returns the same curve traversed from end to start.
    #[must_use]
    pub fn reverse(&self) -> Self {
        let control = self.control.iter().rev().copied().collect();
        Self::from_parts(self.end, control, self.start)
    }
}

/// Picks a unit vector perpendicular to `v`.
fn any_perpendicular(v: &Vector3) -> Vector3 {
    let axis = if v.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    v.cross(&axis).normalize()
}

impl Clone for Segment {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            control: self.control.clone(),
            end: self.end,
            lut: self.lut.clone(),
            length: self.length.clone(),
        }
    }
}

impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.control == other.control && self.end == other.end
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("start", &self.start)
            .field("control", &self.control.as_slice())
            .field("end", &self.end)
            .finish_non_exhaustive()
    }
}

impl Curve for Segment {
    fn evaluate(&self, t: f64) -> Point3 {
        self.position(t)
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let d = self.derivative(t);
        let len = d.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(d / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        (self.end - self.start).norm() < TOLERANCE
    }
}
