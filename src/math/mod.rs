mod aabb;
pub mod roots;

pub use aabb::Aabb;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Linearly interpolates between two points.
///
/// Exact at both ends: `lerp(a, b, 0.0) == a` and `lerp(a, b, 1.0) == b`.
#[must_use]
pub fn lerp(a: &Point3, b: &Point3, t: f64) -> Point3 {
    Point3::from(a.coords * (1.0 - t) + b.coords * t)
}
