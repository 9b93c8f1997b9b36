use std::cmp::Ordering;

use itertools::Itertools;
use nalgebra::{allocator::Allocator, DefaultAllocator, DimName};

use crate::{curve::Polyline, interval::Interval, misc::FloatingPoint};

use super::{CurveIntersectionEvent, CurveIntersectionTolerance, Intersects};

impl<'a, T, D> Intersects<'a, &'a Polyline<T, D>> for Polyline<T, D>
where
    T: FloatingPoint,
    D: DimName,
    DefaultAllocator: Allocator<D>,
{
    type Output = anyhow::Result<Vec<CurveIntersectionEvent<T>>>;
    type Option = Option<CurveIntersectionTolerance<T>>;

    /// Find the intersection events with another polyline, sorted by the parameter on `self`.
    /// * `other` - The other polyline to intersect with
    /// * `option` - Tolerances for points and overlaps
    ///
    /// # Example
    /// ```
    /// use curve_difference::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let a = Polyline2D::try_uniform(&[Point2::new(0., 0.), Point2::new(10., 0.)]).unwrap();
    /// let b = Polyline2D::try_uniform(&[
    ///     Point2::new(2., 0.),
    ///     Point2::new(6., 0.),
    ///     Point2::new(6., 5.),
    ///     Point2::new(8., -5.),
    /// ]).unwrap();
    ///
    /// let events = a.find_intersection(&b, None).unwrap();
    /// assert_eq!(events.len(), 2);
    /// assert_eq!(events[0].overlap_a(), Some(&Interval::new(0.2, 0.6)));
    /// assert!(!events[1].is_overlap());
    /// ```
    fn find_intersection(
        &'a self,
        other: &'a Polyline<T, D>,
        option: Self::Option,
    ) -> Self::Output {
        let tolerance = option.unwrap_or_default();
        anyhow::ensure!(
            tolerance.intersection >= T::zero() && tolerance.overlap >= T::zero(),
            "Tolerances must not be negative"
        );
        let reach = tolerance.intersection.max(tolerance.overlap);

        let mut overlaps = vec![];
        let mut points = vec![];

        for (sa, ra) in self.segments() {
            let ba = sa.bounding_box();
            for (sb, rb) in other.segments() {
                if !ba.intersects(&sb.bounding_box(), Some(reach)) {
                    continue;
                }

                if let Some((s, t)) = sa.collinear_overlap(&sb, tolerance.overlap) {
                    overlaps.push((to_global(&ra, &s), to_global(&rb, &t)));
                    continue;
                }

                let (s, t) = sa.closest_parameters(&sb);
                if (sa.point_at(s) - sb.point_at(t)).norm() <= tolerance.intersection {
                    points.push((
                        T::lerp(ra.min(), ra.max(), s),
                        T::lerp(rb.min(), rb.max(), t),
                    ));
                }
            }
        }

        // join overlaps found on consecutive segments
        let overlaps = overlaps
            .into_iter()
            .sorted_by(|x, y| x.0.min().partial_cmp(&y.0.min()).unwrap_or(Ordering::Equal))
            .coalesce(|(a0, b0), (a1, b1)| {
                if a1.min() <= a0.max() && b0.touches(&b1) {
                    Ok((
                        Interval::new(a0.min(), a0.max().max(a1.max())),
                        Interval::new(b0.min().min(b1.min()), b0.max().max(b1.max())),
                    ))
                } else {
                    Err(((a0, b0), (a1, b1)))
                }
            })
            .collect_vec();

        let near = |t0: T, t1: T| {
            (self.point_at(t0) - self.point_at(t1)).norm() <= tolerance.intersection
        };

        // drop points lying on an overlap and duplicates found at shared vertices
        let points = points
            .into_iter()
            .filter(|(pa, _)| {
                !overlaps.iter().any(|(oa, _)| {
                    oa.contains(*pa) || near(*pa, oa.min()) || near(*pa, oa.max())
                })
            })
            .sorted_by(|x, y| x.0.partial_cmp(&y.0).unwrap_or(Ordering::Equal))
            .coalesce(|x, y| if near(x.0, y.0) { Ok(x) } else { Err((x, y)) })
            .collect_vec();

        let events = overlaps
            .into_iter()
            .map(|(a, b)| CurveIntersectionEvent::Overlap { a, b })
            .chain(
                points
                    .into_iter()
                    .map(|(a, b)| CurveIntersectionEvent::Point { a, b }),
            )
            .sorted_by(|x, y| {
                x.a_parameter()
                    .partial_cmp(&y.a_parameter())
                    .unwrap_or(Ordering::Equal)
            })
            .collect_vec();

        Ok(events)
    }
}

/// Map a local range in [0, 1] on a segment to the parameter range of the curve.
fn to_global<T: FloatingPoint>(range: &Interval<T>, local: &Interval<T>) -> Interval<T> {
    Interval::new(
        T::lerp(range.min(), range.max(), local.min()),
        T::lerp(range.min(), range.max(), local.max()),
    )
}
