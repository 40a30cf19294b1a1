use crate::geometry::Segment;

use super::Split;

/// Extracts the piece of a segment between two parameters.
///
/// The bounds are clamped to `[0, 1]` and may be given in either order. The
/// result has the degree of the input and runs in the input's direction.
pub struct Trim {
    t_start: f64,
    t_end: f64,
}

impl Trim {
    /// Creates a new `Trim` operation.
    #[must_use]
    pub fn new(t_start: f64, t_end: f64) -> Self {
        let a = t_start.clamp(0.0, 1.0);
        let b = t_end.clamp(0.0, 1.0);
        Self {
            t_start: a.min(b),
            t_end: a.max(b),
        }
    }

    /// Executes the trim, returning the sub-segment.
    #[must_use]
    pub fn execute(&self, segment: &Segment) -> Segment {
        let (head, _) = Split::new(self.t_end).execute(segment);
        if self.t_end <= 0.0 {
            return head;
        }
        let (_, piece) = Split::new(self.t_start / self.t_end).execute(&head);
        piece
    }
}

impl Segment {
    /// Returns the piece between `t_start` and `t_end`.
    ///
    /// See [`Trim`].
    #[must_use]
    pub fn trim(&self, t_start: f64, t_end: f64) -> Segment {
        Trim::new(t_start, t_end).execute(self)
    }
}
