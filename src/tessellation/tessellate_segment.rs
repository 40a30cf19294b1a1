use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::{Degree, Segment};
use crate::math::{Point3, TOLERANCE};

use super::{Polyline, TessellationParams};

/// Flattens a segment into a polyline.
///
/// Starts from `min_segments` uniform pieces and bisects every piece whose
/// control polygon strays further than `tolerance` from its chord. Since a
/// Bezier curve lies in the convex hull of its control points, an accepted
/// piece deviates from its chord by at most `tolerance`. Bisection stops
/// early once `max_segments` would be exceeded.
pub struct TessellateSegment {
    params: TessellationParams,
}

impl TessellateSegment {
    /// Creates a new `TessellateSegment` operation.
    #[must_use]
    pub fn new(params: TessellationParams) -> Self {
        Self { params }
    }

    /// Executes the tessellation, returning a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not positive, `min_segments` is
    /// zero, or `max_segments` is below `min_segments`.
    pub fn execute(&self, segment: &Segment) -> Result<Polyline> {
        let TessellationParams {
            tolerance,
            min_segments,
            max_segments,
        } = self.params;

        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(OperationError::InvalidParameters(format!(
                "tolerance must be positive, got {tolerance}"
            ))
            .into());
        }
        if min_segments == 0 || max_segments < min_segments {
            return Err(OperationError::InvalidParameters(format!(
                "segment bounds must satisfy 1 <= min ({min_segments}) <= max ({max_segments})"
            ))
            .into());
        }

        let mut parameters = vec![0.0];
        if segment.degree() == Degree::Linear {
            parameters.extend(uniform(min_segments).into_iter().skip(1));
        } else {
            // Pending intervals, popped in parameter order.
            let mut pending: Vec<(f64, f64)> = uniform(min_segments)
                .windows(2)
                .rev()
                .map(|w| (w[0], w[1]))
                .collect();

            while let Some((t0, t1)) = pending.pop() {
                let leaves = parameters.len() + pending.len();
                let piece = segment.trim(t0, t1);
                if leaves >= max_segments || flatness(&piece) <= tolerance {
                    parameters.push(t1);
                } else {
                    let mid = 0.5 * (t0 + t1);
                    pending.push((mid, t1));
                    pending.push((t0, mid));
                }
            }
        }

        let points: Vec<Point3> = parameters.iter().map(|&t| segment.position(t)).collect();
        debug!(
            degree = ?segment.degree(),
            segments = points.len() - 1,
            tolerance,
            "tessellated segment"
        );
        Ok(Polyline { points, parameters })
    }
}

/// Parameters `0, 1/n, ..., 1`.
#[allow(clippy::cast_precision_loss)]
fn uniform(n: usize) -> Vec<f64> {
    (0..=n).map(|i| i as f64 / n as f64).collect()
}

/// Largest distance from a control point to the chord.
fn flatness(segment: &Segment) -> f64 {
    let start = segment.start();
    let chord = segment.end() - start;
    let len = chord.norm();
    segment
        .control()
        .iter()
        .map(|c| {
            let offset = c - start;
            if len < TOLERANCE {
                offset.norm()
            } else {
                offset.cross(&chord).norm() / len
            }
        })
        .fold(0.0, f64::max)
}
