pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{BezkernError, Result};
pub use geometry::{Curve, Degree, Segment};
