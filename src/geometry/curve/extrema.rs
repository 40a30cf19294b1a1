use crate::math::roots::bernstein_roots;
use crate::math::{Aabb, Point3, TOLERANCE};

use super::lut::step_parameter;
use super::{Degree, Segment, DEFAULT_LUT_SIZE};

/// Axes searched for extrema: the drawing plane (x and y).
const EXTREMA_AXES: [usize; 2] = [0, 1];

impl Segment {
    /// Parameters in `[0, 1]` where the x or y derivative vanishes.
    ///
    /// Sorted ascending without duplicates. Always empty for a linear
    /// segment.
    #[must_use]
    pub fn extrema(&self) -> Vec<f64> {
        if self.degree() == Degree::Linear {
            return Vec::new();
        }

        let d_points = self.d_points();
        let Some(first) = d_points.first() else {
            return Vec::new();
        };

        let mut roots: Vec<f64> = EXTREMA_AXES
            .iter()
            .flat_map(|&axis| {
                let coefficients: Vec<f64> = first.iter().map(|v| v[axis]).collect();
                bernstein_roots(&coefficients)
            })
            .filter(|t| (-TOLERANCE..=1.0 + TOLERANCE).contains(t))
            .map(|t| if t <= 0.0 { 0.0 } else { t.min(1.0) })
            .collect();

        roots.sort_by(f64::total_cmp);
        roots.dedup_by(|a, b| (*a - *b).abs() < TOLERANCE);
        roots
    }

    /// Tight axis-aligned bounds: endpoints plus every extremum.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        let mut points = vec![self.start, self.end];
        points.extend(self.extrema().into_iter().map(|t| self.position(t)));
        Aabb::from_points(&points).unwrap_or_else(|| Aabb::new(self.start, Default::default()))
    }

    /// Total arc length.
    ///
    /// Exact chord length for a linear segment. Otherwise the polyline
    /// length through the uniform table parameters merged with the
    /// extrema, so turning points are never cut off. Computed once.
    #[must_use]
    pub fn length(&self) -> f64 {
        *self.length.get_or_init(|| match self.degree() {
            Degree::Linear => (self.end - self.start).norm(),
            Degree::Quadratic | Degree::Cubic => {
                let mut params: Vec<f64> = (0..=DEFAULT_LUT_SIZE)
                    .map(|i| step_parameter(i, DEFAULT_LUT_SIZE))
                    .chain(self.extrema())
                    .collect();
                params.sort_by(f64::total_cmp);
                params.dedup();
                polyline_length(params.into_iter().map(|t| self.position(t)))
            }
        })
    }
}

/// Sums the distances between consecutive points.
pub(crate) fn polyline_length(points: impl IntoIterator<Item = Point3>) -> f64 {
    let mut iter = points.into_iter();
    let Some(mut prev) = iter.next() else {
        return 0.0;
    };
    let mut total = 0.0;
    for p in iter {
        total += (p - prev).norm();
        prev = p;
    }
    total
}
