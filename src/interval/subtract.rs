use crate::misc::FloatingPoint;

use super::Interval;

/// Remove `remove` from every interval in `set`.
///
/// Each interval is kept as is when it only touches `remove` at an endpoint,
/// dropped when `remove` covers it, and otherwise split into the pieces left of
/// and right of `remove`. Pieces are emitted in place, so a sorted disjoint `set`
/// stays sorted and disjoint.
///
/// # Example
/// ```
/// use curve_difference::prelude::{subtract, Interval};
/// let set = vec![Interval::new(0., 10.)];
/// let remainder = subtract(&set, &Interval::new(3., 7.));
/// assert_eq!(remainder, vec![Interval::new(0., 3.), Interval::new(7., 10.)]);
/// ```
pub fn subtract<T: FloatingPoint>(set: &[Interval<T>], remove: &Interval<T>) -> Vec<Interval<T>> {
    let mut remaining = Vec::with_capacity(set.len() + 1);

    for interval in set {
        // re-normalize in case the caller built the set from raw bounds
        let interval = Interval::new(interval.min(), interval.max());

        if interval.min() >= remove.max() || interval.max() <= remove.min() {
            remaining.push(interval);
            continue;
        }

        if interval.min() < remove.min() {
            remaining.push(Interval::new(
                interval.min(),
                remove.min().min(interval.max()),
            ));
        }

        if interval.max() > remove.max() {
            remaining.push(Interval::new(
                remove.max().max(interval.min()),
                interval.max(),
            ));
        }
    }

    remaining
}

/// Fold a sequence of removals into `set`, in order.
pub fn subtract_all<'a, T, I>(set: &[Interval<T>], removes: I) -> Vec<Interval<T>>
where
    T: FloatingPoint,
    I: IntoIterator<Item = &'a Interval<T>>,
{
    removes
        .into_iter()
        .fold(set.to_vec(), |remaining, remove| subtract(&remaining, remove))
}
