use std::cmp::Ordering;

use itertools::Itertools;

use crate::misc::FloatingPoint;

use super::Interval;

/// Merge possibly overlapping intervals into the minimal sorted disjoint cover.
///
/// Intervals that merely touch are merged too, so abutting overlap regions
/// coming from neighboring subtractors become one continuous region.
///
/// # Example
/// ```
/// use curve_difference::prelude::{merge, Interval};
/// let merged = merge(&[
///     Interval::new(4., 8.),
///     Interval::new(2., 5.),
///     Interval::new(8., 9.),
///     Interval::new(12., 13.),
/// ]);
/// assert_eq!(merged, vec![Interval::new(2., 9.), Interval::new(12., 13.)]);
/// ```
pub fn merge<T: FloatingPoint>(intervals: &[Interval<T>]) -> Vec<Interval<T>> {
    if intervals.len() <= 1 {
        return intervals.to_vec();
    }

    intervals
        .iter()
        .copied()
        .sorted_by(|x, y| x.min().partial_cmp(&y.min()).unwrap_or(Ordering::Equal))
        .coalesce(|tail, next| {
            if next.min() <= tail.max() {
                Ok(Interval::new(tail.min(), tail.max().max(next.max())))
            } else {
                Err((tail, next))
            }
        })
        .collect_vec()
}
