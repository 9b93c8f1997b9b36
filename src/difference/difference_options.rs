use crate::misc::FloatingPoint;

/// Options for the boolean difference of curves.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DifferenceOptions<T: FloatingPoint> {
    /// Distance under which two curves are considered to intersect or overlap.
    /// Used as both the intersection and the overlap tolerance.
    pub tolerance: T,
    /// Intervals spanning no more than this in parameter space are dropped from the result.
    pub degenerate_tolerance: T,
    /// Skip subtractors whose bounding box does not overlap the source's.
    /// Only affects speed, never the result.
    pub fast_reject: bool,
}

impl<T: FloatingPoint> Default for DifferenceOptions<T> {
    fn default() -> Self {
        Self {
            tolerance: T::from_literal(1e-6),
            degenerate_tolerance: T::default_epsilon(),
            fast_reject: true,
        }
    }
}

impl<T: FloatingPoint> DifferenceOptions<T> {
    pub fn with_tolerance(mut self, tolerance: T) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn with_degenerate_tolerance(mut self, degenerate_tolerance: T) -> Self {
        self.degenerate_tolerance = degenerate_tolerance;
        self
    }

    pub fn with_fast_reject(mut self, fast_reject: bool) -> Self {
        self.fast_reject = fast_reject;
        self
    }
}
