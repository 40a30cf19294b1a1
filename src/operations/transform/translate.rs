use crate::geometry::Segment;
use crate::math::{Matrix4, Vector3};

use super::GeneralTransform;

/// Translates a segment by a displacement vector.
pub struct Translate {
    displacement: Vector3,
}

impl Translate {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(displacement: Vector3) -> Self {
        Self { displacement }
    }

    /// Executes the translation, returning the moved segment.
    #[must_use]
    pub fn execute(&self, segment: &Segment) -> Segment {
        GeneralTransform::new(Matrix4::new_translation(&self.displacement)).execute(segment)
    }
}
