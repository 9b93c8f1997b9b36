mod curve_difference;
mod difference_options;
mod interval_difference;

pub use curve_difference::*;
pub use difference_options::*;
pub use interval_difference::*;

use nalgebra::{allocator::Allocator, DefaultAllocator, DimName};

use crate::{curve::Polyline, misc::FloatingPoint};

/// A trait for the boolean difference of a curve against several curves.
pub trait BooleanDifference<'a, S> {
    type Output;
    type Option;

    fn boolean_difference(&'a self, subtractors: S, option: Self::Option) -> Self::Output;
}

impl<'a, T, D> BooleanDifference<'a, &'a [Polyline<T, D>]> for Polyline<T, D>
where
    T: FloatingPoint,
    D: DimName,
    DefaultAllocator: Allocator<D>,
{
    type Output = CurveDifference<Polyline<T, D>>;
    type Option = Option<DifferenceOptions<T>>;

    /// Subtract polylines from this one.
    /// # Example
    /// ```
    /// use curve_difference::prelude::*;
    /// use nalgebra::Point2;
    /// use approx::assert_relative_eq;
    ///
    /// let source = Polyline2D::try_uniform(&[Point2::new(0., 0.), Point2::new(10., 0.)]).unwrap();
    /// let cutter = Polyline2D::try_uniform(&[Point2::new(3., 0.), Point2::new(7., 0.)]).unwrap();
    ///
    /// let cutters = vec![cutter];
    /// let difference = source.boolean_difference(cutters.as_slice(), None);
    /// let (remainder, overlaps) = difference.into_tuple();
    /// assert_eq!(remainder.len(), 2);
    /// assert_eq!(overlaps.len(), 1);
    /// assert_relative_eq!(*overlaps[0].first_point(), Point2::new(3., 0.));
    /// assert_relative_eq!(*overlaps[0].end_point(), Point2::new(7., 0.));
    /// ```
    fn boolean_difference(
        &'a self,
        subtractors: &'a [Polyline<T, D>],
        option: Self::Option,
    ) -> Self::Output {
        let options = option.unwrap_or_default();
        boolean_difference(Some(self), subtractors.iter().map(Some), &options)
    }
}

#[cfg(test)]
mod tests;
