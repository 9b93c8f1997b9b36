use crate::misc::FloatingPoint;

/// Tolerances for curve / curve intersection.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveIntersectionTolerance<T: FloatingPoint> {
    /// Maximum distance between two points to consider them as intersecting.
    pub intersection: T,
    /// Maximum distance between two curves to consider them as overlapping.
    /// Overlaps no longer than this are reported as points.
    pub overlap: T,
}

impl<T: FloatingPoint> Default for CurveIntersectionTolerance<T> {
    fn default() -> Self {
        Self::uniform(T::from_literal(1e-6))
    }
}

impl<T: FloatingPoint> CurveIntersectionTolerance<T> {
    /// Use the same tolerance for intersections and overlaps.
    pub fn uniform(tolerance: T) -> Self {
        Self {
            intersection: tolerance,
            overlap: tolerance,
        }
    }

    pub fn with_intersection(mut self, intersection: T) -> Self {
        self.intersection = intersection;
        self
    }

    pub fn with_overlap(mut self, overlap: T) -> Self {
        self.overlap = overlap;
        self
    }
}
