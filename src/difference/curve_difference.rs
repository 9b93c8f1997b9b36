use crate::{
    bounding_box::BoundingBoxOverlap,
    curve::ArcLengthParameter,
    intersects::{CurveIntersectionEvent, CurveIntersectionTolerance, Intersects},
    misc::FloatingPoint,
    trim::{trim_intervals, TrimInterval},
};

use super::{interval_difference, DifferenceOptions, IntervalDifference};

/// The sub-curves of a boolean difference.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveDifference<C> {
    remainder: Vec<C>,
    overlaps: Vec<C>,
}

impl<C> CurveDifference<C> {
    pub fn new(remainder: Vec<C>, overlaps: Vec<C>) -> Self {
        Self {
            remainder,
            overlaps,
        }
    }

    /// Parts of the source curve not covered by any subtractor.
    pub fn remainder(&self) -> &[C] {
        &self.remainder
    }

    /// Parts of the source curve covered by at least one subtractor.
    pub fn overlaps(&self) -> &[C] {
        &self.overlaps
    }

    pub fn is_empty(&self) -> bool {
        self.remainder.is_empty() && self.overlaps.is_empty()
    }

    pub fn into_tuple(self) -> (Vec<C>, Vec<C>) {
        (self.remainder, self.overlaps)
    }
}

impl<C> Default for CurveDifference<C> {
    fn default() -> Self {
        Self::new(vec![], vec![])
    }
}

/// Trim the source curve once per interval of the difference.
/// Intervals that fail to trim are left out of the result.
pub fn materialize<T, C>(source: &C, difference: &IntervalDifference<T>) -> CurveDifference<C>
where
    T: FloatingPoint,
    C: TrimInterval<T>,
{
    CurveDifference::new(
        trim_intervals(source, difference.remainder()),
        trim_intervals(source, difference.overlaps()),
    )
}

/// Subtract curves from a source curve.
/// Computes the interval difference over the source's parameter domain
/// and trims the source to each resulting interval.
pub fn boolean_difference<'a, T, C, S, I>(
    source: Option<&'a C>,
    subtractors: I,
    options: &DifferenceOptions<T>,
) -> CurveDifference<C>
where
    T: FloatingPoint,
    C: TrimInterval<T>
        + ArcLengthParameter<T>
        + BoundingBoxOverlap<T, S>
        + Intersects<
            'a,
            &'a S,
            Output = anyhow::Result<Vec<CurveIntersectionEvent<T>>>,
            Option = Option<CurveIntersectionTolerance<T>>,
        >,
    S: 'a,
    I: IntoIterator<Item = Option<&'a S>>,
{
    let Some(source) = source else {
        return CurveDifference::default();
    };
    let intervals = interval_difference(Some(source), subtractors, options);
    materialize(source, &intervals)
}
