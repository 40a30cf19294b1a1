use crate::geometry::{Degree, Segment, DEFAULT_LUT_SIZE};
use crate::operations::modification::Split;

/// Maps an arc length measured from the start to a curve parameter.
///
/// Lengths outside `[0, length]` are clamped. Linear segments map exactly;
/// curved ones walk the lookup table and interpolate inside the table step
/// where the running length first reaches the target.
///
/// The total from [`Segment::length`] also counts the extrema, so it can
/// exceed the walked table length by a little. Targets inside that gap map
/// to `1`.
pub struct ParameterAtLength {
    length: f64,
}

impl ParameterAtLength {
    /// Creates a new `ParameterAtLength` query.
    #[must_use]
    pub fn new(length: f64) -> Self {
        Self { length }
    }

    /// Executes the query, returning a parameter in `[0, 1]`.
    #[must_use]
    pub fn execute(&self, segment: &Segment) -> f64 {
        let total = segment.length();
        if total <= 0.0 {
            return 0.0;
        }

        if segment.degree() == Degree::Linear {
            return (self.length / total).clamp(0.0, 1.0);
        }

        let target = self.length.clamp(0.0, total);
        if target <= 0.0 {
            return 0.0;
        }
        if target >= total {
            return 1.0;
        }

        let table = segment.lut(DEFAULT_LUT_SIZE);
        #[allow(clippy::cast_precision_loss)]
        let cells = (table.len() - 1) as f64;

        let mut walked = 0.0;
        for (i, pair) in table.windows(2).enumerate() {
            let step = (pair[1] - pair[0]).norm();
            if walked + step >= target {
                let overshoot = walked + step - target;
                let fraction = if step > 0.0 { 1.0 - overshoot / step } else { 0.0 };
                #[allow(clippy::cast_precision_loss)]
                let t = (i as f64 + fraction) / cells;
                return t.clamp(0.0, 1.0);
            }
            walked += step;
        }
        1.0
    }
}

impl Segment {
    /// Parameter at which the arc length from the start equals `length`.
    ///
    /// See [`ParameterAtLength`].
    #[must_use]
    pub fn t_for_length(&self, length: f64) -> f64 {
        ParameterAtLength::new(length).execute(self)
    }

    /// Arc length of the piece `[0, t]`.
    #[must_use]
    pub fn arc_length_at(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return self.length();
        }
        let (left, _) = Split::new(t).execute(self);
        left.length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    fn arch() -> Segment {
        Segment::cubic(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(0.0, 10.0, 0.0),
            Point3::new(10.0, 10.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        )
    }

    #[test]
    fn linear_is_exact() {
        let seg = Segment::linear(Point3::origin(), Point3::new(10.0, 0.0, 0.0));
        assert_relative_eq!(seg.t_for_length(2.5), 0.25);
        assert_relative_eq!(seg.t_for_length(-4.0), 0.0);
        assert_relative_eq!(seg.t_for_length(40.0), 1.0);
    }

    #[test]
    fn boundaries_map_to_ends() {
        let seg = arch();
        assert!(seg.t_for_length(0.0).abs() < f64::EPSILON);
        assert_relative_eq!(seg.t_for_length(seg.length()), 1.0);
        assert_relative_eq!(seg.t_for_length(seg.length() * 3.0), 1.0);
        assert!(seg.t_for_length(-1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn symmetric_curve_halfway_is_midpoint() {
        let seg = arch();
        let t = seg.t_for_length(seg.length() / 2.0);
        assert_relative_eq!(t, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn parameter_is_monotone_in_length() {
        let seg = arch();
        let total = seg.length();
        let params: Vec<f64> = (0..=20)
            .map(|i| seg.t_for_length(total * f64::from(i) / 20.0))
            .collect();
        assert!(params.windows(2).all(|w| w[0] <= w[1]), "{params:?}");
    }

    #[test]
    fn lengths_past_table_walk_map_to_end() {
        // The y extremum near t = 5/6 falls between table samples.
        let seg = Segment::cubic(
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 5.0, 0.0),
            Point3::new(9.0, -3.0, 0.0),
            Point3::new(10.0, 0.0, 0.0),
        );
        let table = seg.lut(DEFAULT_LUT_SIZE);
        let walked: f64 = table.windows(2).map(|w| (w[1] - w[0]).norm()).sum();
        let total = seg.length();
        assert!(walked < total, "walked {walked} total {total}");
        assert_relative_eq!(seg.t_for_length(0.5 * (walked + total)), 1.0);
        assert!(seg.t_for_length(walked - 1e-3) < 1.0);
    }

    #[test]
    fn arc_length_round_trip() {
        let seg = arch();
        for &t in &[0.1, 0.3, 0.6, 0.9] {
            let back = seg.t_for_length(seg.arc_length_at(t));
            assert_relative_eq!(back, t, epsilon = 2e-3);
        }
    }

    #[test]
    fn arc_length_is_monotone() {
        let seg = arch();
        let lengths: Vec<f64> = (0..=10)
            .map(|i| seg.arc_length_at(f64::from(i) / 10.0))
            .collect();
        assert!(lengths[0].abs() < f64::EPSILON);
        assert!(lengths.windows(2).all(|w| w[0] <= w[1]), "{lengths:?}");
        assert_relative_eq!(lengths[10], seg.length());
    }

    #[test]
    fn rebuilds_table_at_default_size() {
        let seg = arch();
        let _ = seg.lut(7);
        let t = seg.t_for_length(seg.length() / 2.0);
        assert_eq!(seg.lut(DEFAULT_LUT_SIZE).len(), DEFAULT_LUT_SIZE + 1);
        assert_relative_eq!(t, 0.5, epsilon = 1e-3);
    }
}
