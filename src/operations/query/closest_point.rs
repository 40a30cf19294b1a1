use tracing::debug;

use crate::geometry::{Segment, DEFAULT_LUT_SIZE};
use crate::math::Point3;

/// Number of refinement samples per lookup table step.
pub const REFINE_STEPS_PER_CELL: u32 = 10;

/// Result of projecting a point onto a segment.
#[derive(Debug, Clone)]
pub struct SegmentProjection {
    /// The segment that was projected onto.
    pub segment: Segment,
    /// The parameter value at the closest point.
    pub parameter: f64,
    /// Squared distance from the query point to the closest point.
    pub distance_sq: f64,
    /// The closest point on the segment.
    pub point: Point3,
}

impl SegmentProjection {
    /// Distance from the query point to the closest point.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance_sq.sqrt()
    }
}

/// Finds the point on a segment closest to a query point.
///
/// Scans the lookup table for the nearest sample, then walks the two
/// neighbouring table steps at a tenth of the table resolution. When the
/// nearest sample is the first or last table entry the scan result is
/// returned as is.
pub struct ClosestPointOnSegment {
    point: Point3,
}

impl ClosestPointOnSegment {
    /// Creates a new `ClosestPointOnSegment` query.
    #[must_use]
    pub fn new(point: Point3) -> Self {
        Self { point }
    }

    /// Executes the query against `segment`.
    #[must_use]
    pub fn execute(&self, segment: &Segment) -> SegmentProjection {
        let table = segment.lut(DEFAULT_LUT_SIZE);
        let last = table.len() - 1;

        let (index, coarse_sq) = table
            .iter()
            .map(|p| (p - self.point).norm_squared())
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or((0, f64::INFINITY));

        #[allow(clippy::cast_precision_loss)]
        let cells = last as f64;

        if index == 0 || index == last {
            #[allow(clippy::cast_precision_loss)]
            let parameter = if last == 0 { 0.0 } else { index as f64 / cells };
            debug!(parameter, "projection resolved at segment boundary");
            return SegmentProjection {
                segment: segment.clone(),
                parameter,
                distance_sq: coarse_sq,
                point: table[index],
            };
        }

        #[allow(clippy::cast_precision_loss)]
        let t_low = (index - 1) as f64 / cells;
        let step = 1.0 / (f64::from(REFINE_STEPS_PER_CELL) * cells);

        let mut best_t = t_low;
        let mut best_point = segment.position(t_low);
        let mut best_sq = (best_point - self.point).norm_squared();
        for k in 1..=2 * REFINE_STEPS_PER_CELL {
            let t = t_low + f64::from(k) * step;
            let p = segment.position(t);
            let d = (p - self.point).norm_squared();
            if d < best_sq {
                best_t = t;
                best_point = p;
                best_sq = d;
            }
        }

        SegmentProjection {
            segment: segment.clone(),
            parameter: best_t.clamp(0.0, 1.0),
            distance_sq: best_sq,
            point: best_point,
        }
    }
}

impl Segment {
    /// Projects `point` onto the segment.
    ///
    /// See [`ClosestPointOnSegment`].
    #[must_use]
    pub fn project(&self, point: &Point3) -> SegmentProjection {
        ClosestPointOnSegment::new(*point).execute(self)
    }
}
