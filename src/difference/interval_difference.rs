use itertools::Itertools;

use crate::{
    bounding_box::BoundingBoxOverlap,
    curve::ArcLengthParameter,
    interval::{merge, subtract_all, Interval},
    intersects::{CurveIntersectionEvent, CurveIntersectionTolerance, Intersects},
    misc::FloatingPoint,
};

use super::DifferenceOptions;

/// The parameter intervals of a boolean difference.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalDifference<T> {
    /// sorted, disjoint parts of the source domain not covered by any subtractor
    remainder: Vec<Interval<T>>,
    /// sorted, disjoint parts of the source domain covered by at least one subtractor
    overlaps: Vec<Interval<T>>,
}

impl<T: FloatingPoint> IntervalDifference<T> {
    pub fn new(remainder: Vec<Interval<T>>, overlaps: Vec<Interval<T>>) -> Self {
        Self {
            remainder,
            overlaps,
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![], vec![])
    }

    pub fn remainder(&self) -> &[Interval<T>] {
        &self.remainder
    }

    pub fn overlaps(&self) -> &[Interval<T>] {
        &self.overlaps
    }

    pub fn is_empty(&self) -> bool {
        self.remainder.is_empty() && self.overlaps.is_empty()
    }

    pub fn into_tuple(self) -> (Vec<Interval<T>>, Vec<Interval<T>>) {
        (self.remainder, self.overlaps)
    }
}

/// Compute the parameter domain of a curve from its arc length end points.
pub fn arc_length_domain<T, C>(curve: &C) -> anyhow::Result<Interval<T>>
where
    T: FloatingPoint,
    C: ArcLengthParameter<T>,
{
    let length = curve.try_length()?;
    let start = curve.try_length_parameter(T::zero())?;
    let end = curve.try_length_parameter(length)?;
    Ok(Interval::new(start.parameter(), end.parameter()))
}

/// Compute which parts of the source domain survive the subtractors and which are overlapped.
///
/// * `source` - The curve to subtract from. `None` yields an empty result.
/// * `subtractors` - The curves to subtract. `None` entries are skipped.
/// * `options` - Tolerances and the fast reject switch
///
/// Failures of the collaborating curve operations never abort the whole operation:
/// a failed intersection skips that subtractor, a failed arc length mapping yields an empty result.
pub fn interval_difference<'a, T, C, S, I>(
    source: Option<&'a C>,
    subtractors: I,
    options: &DifferenceOptions<T>,
) -> IntervalDifference<T>
where
    T: FloatingPoint,
    C: ArcLengthParameter<T>
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
        debug!("no source curve, nothing to subtract from");
        return IntervalDifference::empty();
    };

    let domain = match arc_length_domain(source) {
        Ok(domain) => domain,
        Err(e) => {
            warn!("failed to compute the domain of the source curve: {}", e);
            return IntervalDifference::empty();
        }
    };

    let overlaps = find_overlaps(source, subtractors, options);
    difference_from_overlaps(&domain, &overlaps, options.degenerate_tolerance)
}

/// Collect the overlapped intervals on `source` for every subtractor.
/// Subtractors are independent of each other here; the removal is applied afterwards.
fn find_overlaps<'a, T, C, S, I>(
    source: &'a C,
    subtractors: I,
    options: &DifferenceOptions<T>,
) -> Vec<Interval<T>>
where
    T: FloatingPoint,
    C: BoundingBoxOverlap<T, S>
        + Intersects<
            'a,
            &'a S,
            Output = anyhow::Result<Vec<CurveIntersectionEvent<T>>>,
            Option = Option<CurveIntersectionTolerance<T>>,
        >,
    S: 'a,
    I: IntoIterator<Item = Option<&'a S>>,
{
    let tolerance = CurveIntersectionTolerance::uniform(options.tolerance);

    subtractors
        .into_iter()
        .enumerate()
        .flat_map(|(index, subtractor)| {
            let Some(subtractor) = subtractor else {
                debug!("subtractor #{} is absent, skipped", index);
                return vec![];
            };

            if options.fast_reject
                && !source.bounding_box_overlaps(subtractor, Some(options.tolerance))
            {
                debug!("subtractor #{} is rejected by its bounding box", index);
                return vec![];
            }

            match source.find_intersection(subtractor, Some(tolerance.clone())) {
                Ok(events) => {
                    let overlaps = events
                        .iter()
                        .filter_map(|event| event.overlap_a().copied())
                        .collect_vec();
                    debug!(
                        "subtractor #{}: {} events, {} overlaps",
                        index,
                        events.len(),
                        overlaps.len()
                    );
                    overlaps
                }
                Err(e) => {
                    warn!("failed to intersect with subtractor #{}: {}", index, e);
                    vec![]
                }
            }
        })
        .collect_vec()
}

/// Apply overlapped intervals to a domain.
///
/// Overlaps are clipped to `domain` (the ones outside of it are ignored),
/// removed from `domain` one after another and merged.
/// Intervals no longer than `degenerate_tolerance` are dropped from both outputs.
///
/// # Example
/// ```
/// use curve_difference::prelude::*;
///
/// let difference = difference_from_overlaps(
///     &Interval::new(0., 10.),
///     &[Interval::new(2., 5.), Interval::new(4., 8.)],
///     0.,
/// );
/// assert_eq!(difference.remainder(), &[Interval::new(0., 2.), Interval::new(8., 10.)]);
/// assert_eq!(difference.overlaps(), &[Interval::new(2., 8.)]);
/// ```
pub fn difference_from_overlaps<T: FloatingPoint>(
    domain: &Interval<T>,
    overlaps: &[Interval<T>],
    degenerate_tolerance: T,
) -> IntervalDifference<T> {
    let clipped = overlaps
        .iter()
        .filter_map(|overlap| overlap.clip(domain))
        .collect_vec();

    let keep = |interval: &Interval<T>| !interval.is_degenerate(degenerate_tolerance);
    let remainder = subtract_all(&[*domain], &clipped)
        .into_iter()
        .filter(keep)
        .collect_vec();
    let merged = merge(&clipped).into_iter().filter(keep).collect_vec();

    IntervalDifference::new(remainder, merged)
}
