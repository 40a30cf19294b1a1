//! Real roots of low-order polynomials given in Bernstein form.
//!
//! Derivative control polygons of a Bezier segment are themselves Bernstein
//! coefficients, so their zeros are the parameters where a coordinate's
//! derivative vanishes.

use arrayvec::ArrayVec;

use super::TOLERANCE;

/// Finds the real roots of `a (1 - t) + b t`.
///
/// Returns an empty list when the polynomial is constant.
#[must_use]
pub fn linear_roots(a: f64, b: f64) -> ArrayVec<f64, 1> {
    let mut roots = ArrayVec::new();
    if (a - b).abs() > TOLERANCE {
        roots.push(a / (a - b));
    }
    roots
}

/// Finds the real roots of `a (1 - t)^2 + 2 b t (1 - t) + c t^2`.
///
/// Falls back to the linear case when the leading coefficient vanishes.
#[must_use]
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> ArrayVec<f64, 2> {
    let mut roots = ArrayVec::new();
    let d = a - 2.0 * b + c;

    if d.abs() > TOLERANCE {
        let discriminant = b * b - a * c;
        if discriminant < -TOLERANCE {
            return roots;
        }
        let m1 = -discriminant.max(0.0).sqrt();
        let m2 = a - b;
        roots.push((m2 - m1) / d);
        if m1.abs() > TOLERANCE {
            roots.push((m2 + m1) / d);
        }
    } else if (b - c).abs() > TOLERANCE {
        roots.push((2.0 * b - c) / (2.0 * (b - c)));
    }

    roots
}

/// Dispatches on coefficient count (2 or 3) and collects the roots.
///
/// Other lengths have no roots to report.
#[must_use]
pub fn bernstein_roots(coefficients: &[f64]) -> ArrayVec<f64, 2> {
    match *coefficients {
        [a, b] => linear_roots(a, b).into_iter().collect(),
        [a, b, c] => quadratic_roots(a, b, c),
        _ => ArrayVec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval_quadratic(a: f64, b: f64, c: f64, t: f64) -> f64 {
        let s = 1.0 - t;
        a * s * s + 2.0 * b * s * t + c * t * t
    }

    #[test]
    fn linear_crossing() {
        let roots = linear_roots(2.0, -2.0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn linear_constant_has_no_root() {
        assert!(linear_roots(3.0, 3.0).is_empty());
    }

    #[test]
    fn quadratic_two_roots() {
        // Coefficients 0, 30, 0 vanish at both ends.
        let mut roots = quadratic_roots(0.0, 30.0, 0.0).to_vec();
        roots.sort_by(f64::total_cmp);
        assert_eq!(roots.len(), 2);
        assert!(roots[0].abs() < 1e-12);
        assert!((roots[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn quadratic_degenerates_to_linear() {
        // 30, 0, -30 is the straight line 30 - 60t.
        let roots = quadratic_roots(30.0, 0.0, -30.0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn quadratic_roots_are_zeros() {
        let (a, b, c) = (1.0, -2.0, 0.5);
        for t in quadratic_roots(a, b, c) {
            assert!(eval_quadratic(a, b, c, t).abs() < 1e-9, "t={t}");
        }
    }

    #[test]
    fn quadratic_without_real_roots() {
        assert!(quadratic_roots(1.0, 2.0, 5.0).is_empty());
    }

    #[test]
    fn double_root_reported_once() {
        // (1 - 2t)^2 = 1 (1-t)^2 + 2 (-1) t (1-t) + 1 t^2
        let roots = quadratic_roots(1.0, -1.0, 1.0);
        assert_eq!(roots.len(), 1);
        assert!((roots[0] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn dispatch_by_length() {
        assert_eq!(bernstein_roots(&[1.0, -1.0]).len(), 1);
        assert_eq!(bernstein_roots(&[0.0, 30.0, 0.0]).len(), 2);
        assert!(bernstein_roots(&[1.0]).is_empty());
    }
}
