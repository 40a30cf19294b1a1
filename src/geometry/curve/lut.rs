use std::sync::{Arc, RwLock};

use tracing::trace;

use crate::math::Point3;

use super::Segment;

/// Step count of the lookup table used by length, projection and
/// arc-length queries (the table holds one more point than this).
pub const DEFAULT_LUT_SIZE: usize = 100;

/// Memoized lookup table of a segment.
///
/// Holds at most one table. Populating it is idempotent: any two tables of
/// the same size built from the same segment are identical, so concurrent
/// builders may race and the last write wins. A poisoned lock only costs a
/// rebuild.
#[derive(Default)]
pub(crate) struct LutCache {
    table: RwLock<Option<Arc<[Point3]>>>,
}

impl LutCache {
    fn cached(&self, len: usize) -> Option<Arc<[Point3]>> {
        let guard = self.table.read().ok()?;
        guard.as_ref().filter(|t| t.len() == len).cloned()
    }

    fn store(&self, table: Arc<[Point3]>) {
        if let Ok(mut guard) = self.table.write() {
            *guard = Some(table);
        }
    }
}

impl Clone for LutCache {
    fn clone(&self) -> Self {
        let table = self.table.read().ok().and_then(|g| g.clone());
        Self {
            table: RwLock::new(table),
        }
    }
}

impl Segment {
    /// Samples `size + 1` points at uniformly spaced parameters over `[0, 1]`.
    ///
    /// The table is cached; asking for a different `size` replaces it.
    #[must_use]
    pub fn lut(&self, size: usize) -> Arc<[Point3]> {
        if let Some(table) = self.lut.cached(size + 1) {
            return table;
        }

        trace!(size, degree = ?self.degree(), "building lookup table");
        let table: Arc<[Point3]> = (0..=size)
            .map(|i| self.position(step_parameter(i, size)))
            .collect();
        self.lut.store(Arc::clone(&table));
        table
    }
}

/// Parameter of table index `i` in a table of `size` steps.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn step_parameter(i: usize, size: usize) -> f64 {
    if size == 0 {
        0.0
    } else {
        i as f64 / size as f64
    }
}
