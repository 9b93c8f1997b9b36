use crate::{interval::Interval, misc::FloatingPoint};

/// An event found when intersecting curve `a` with curve `b`.
/// Parameters of `a` are expressed in the domain of the first curve,
/// parameters of `b` in the domain of the second.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurveIntersectionEvent<T> {
    /// The curves cross or touch at an isolated point.
    Point { a: T, b: T },
    /// The curves coincide along a stretch.
    Overlap { a: Interval<T>, b: Interval<T> },
}

impl<T: FloatingPoint> CurveIntersectionEvent<T> {
    pub fn is_overlap(&self) -> bool {
        matches!(self, CurveIntersectionEvent::Overlap { .. })
    }

    /// The overlapped range on the first curve, if this is an overlap event.
    pub fn overlap_a(&self) -> Option<&Interval<T>> {
        match self {
            CurveIntersectionEvent::Overlap { a, .. } => Some(a),
            CurveIntersectionEvent::Point { .. } => None,
        }
    }

    /// The parameter on the first curve where the event starts.
    pub fn a_parameter(&self) -> T {
        match self {
            CurveIntersectionEvent::Point { a, .. } => *a,
            CurveIntersectionEvent::Overlap { a, .. } => a.min(),
        }
    }
}
