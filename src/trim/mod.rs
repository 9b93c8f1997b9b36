use itertools::Itertools;
use nalgebra::{allocator::Allocator, DefaultAllocator, DimName};

use crate::{curve::Polyline, interval::Interval, misc::FloatingPoint};

/// Trim curve to a parameter interval.
pub trait TrimInterval<T: FloatingPoint>: Sized {
    /// Extract the part of the curve spanning `interval`.
    /// # Failures
    /// - if `interval` lies outside of the curve's domain
    /// - if the part to extract has zero length in parameter space
    fn try_trim_interval(&self, interval: &Interval<T>) -> anyhow::Result<Self>;
}

impl<T: FloatingPoint, D: DimName> TrimInterval<T> for Polyline<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// The trimmed polyline keeps the parameters of the source,
    /// so its domain is the trimmed interval itself.
    /// # Example
    /// ```
    /// use curve_difference::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let polyline = Polyline2D::try_uniform(&[
    ///     Point2::new(0., 0.),
    ///     Point2::new(2., 0.),
    ///     Point2::new(2., 2.),
    /// ]).unwrap();
    /// let trimmed = polyline.try_trim_interval(&Interval::new(0.5, 1.5)).unwrap();
    /// assert_eq!(trimmed.domain(), Interval::new(0.5, 1.5));
    /// assert_eq!(
    ///     trimmed.points(),
    ///     &[Point2::new(1., 0.), Point2::new(2., 0.), Point2::new(2., 1.)]
    /// );
    /// ```
    fn try_trim_interval(&self, interval: &Interval<T>) -> anyhow::Result<Self> {
        let domain = self.domain();
        let Some(clipped) = interval.clip(&domain) else {
            anyhow::bail!("Interval {} is outside of the domain {}", interval, domain);
        };
        anyhow::ensure!(
            clipped.length() > T::zero(),
            "Interval {} is degenerate within the domain {}",
            interval,
            domain
        );

        let (min, max) = clipped.as_tuple();
        let inner = self
            .points()
            .iter()
            .zip(self.parameters().iter())
            .filter(|(_, u)| min < **u && **u < max)
            .map(|(p, u)| (p.clone(), *u));

        let (points, parameters): (Vec<_>, Vec<_>) = std::iter::once((self.point_at(min), min))
            .chain(inner)
            .chain(std::iter::once((self.point_at(max), max)))
            .unzip();

        Polyline::try_new(points, parameters)
    }
}

/// Trim curve to several intervals at once, skipping the ones that fail.
pub fn trim_intervals<'a, T, C, I>(curve: &C, intervals: I) -> Vec<C>
where
    T: FloatingPoint,
    C: TrimInterval<T>,
    I: IntoIterator<Item = &'a Interval<T>>,
{
    intervals
        .into_iter()
        .filter_map(|interval| match curve.try_trim_interval(interval) {
            Ok(trimmed) => Some(trimmed),
            Err(e) => {
                warn!("skipped trimming to {}: {}", interval, e);
                None
            }
        })
        .collect_vec()
}
