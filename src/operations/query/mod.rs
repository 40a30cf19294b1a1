mod closest_point;
mod length;

pub use closest_point::{ClosestPointOnSegment, SegmentProjection, REFINE_STEPS_PER_CELL};
pub use hit_test::HitTest;
pub use length::ParameterAtLength;
