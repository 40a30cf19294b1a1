pub mod curve;

pub use curve::{Curve, CurveDomain, Degree, Segment, DEFAULT_LUT_SIZE};
