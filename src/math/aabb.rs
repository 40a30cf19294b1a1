use super::{Point3, Vector3};

/// An axis-aligned bounding box, stored as a minimum corner and dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Extent along each axis (never negative).
    pub size: Vector3,
}

impl Aabb {
    /// Creates a box from its minimum corner and dimensions.
    #[must_use]
    pub fn new(min: Point3, size: Vector3) -> Self {
        Self { min, size }
    }

    /// Computes the tightest box enclosing `points`.
    ///
    /// Returns `None` for an empty iterator.
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point3>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let (min, max) = iter.fold((first, first), |(min, max), p| {
            (min.inf(p), max.sup(p))
        });
        Some(Self::new(min, max - min))
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Point3 {
        self.min + self.size
    }

    /// Extent along X.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    /// Extent along Y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Extent along Z.
    #[must_use]
    pub fn depth(&self) -> f64 {
        self.size.z
    }

    /// Returns whether `point` lies inside or on the box.
    #[must_use]
    pub fn contains(&self, point: &Point3) -> bool {
        let max = self.max();
        (0..3).all(|i| point[i] >= self.min[i] && point[i] <= max[i])
    }
}
