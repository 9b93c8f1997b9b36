use itertools::Itertools;
use nalgebra::{allocator::Allocator, Const, DefaultAllocator, DimName, OPoint};

use crate::{
    bounding_box::{BoundingBox, BoundingBoxOverlap},
    interval::Interval,
    misc::{FloatingPoint, Segment},
};

use super::{ArcLengthParameter, CurveLengthParameter};

/// Piecewise linear curve.
/// Each vertex carries its own parameter, so the parameterization of the curve
/// is linear on each segment but generally not proportional to arc length.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    points: Vec<OPoint<T, D>>,
    /// strictly increasing, one per point
    parameters: Vec<T>,
}

/// 2D polyline alias
pub type Polyline2D<T> = Polyline<T, Const<2>>;

/// 3D polyline alias
pub type Polyline3D<T> = Polyline<T, Const<3>>;

impl<T: FloatingPoint, D: DimName> Polyline<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Create a new polyline from points and their parameters
    /// # Failures
    /// - if there are less than two points
    /// - if the number of parameters differs from the number of points
    /// - if the parameters are not strictly increasing
    ///
    /// # Example
    /// ```
    /// use curve_difference::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let polyline = Polyline2D::try_new(
    ///     vec![Point2::new(0., 0.), Point2::new(1., 0.), Point2::new(1., 3.)],
    ///     vec![0., 0.5, 2.],
    /// );
    /// assert!(polyline.is_ok());
    ///
    /// let unordered = Polyline2D::try_new(
    ///     vec![Point2::new(0., 0.), Point2::new(1., 0.)],
    ///     vec![1., 0.],
    /// );
    /// assert!(unordered.is_err());
    /// ```
    pub fn try_new(points: Vec<OPoint<T, D>>, parameters: Vec<T>) -> anyhow::Result<Self> {
        anyhow::ensure!(
            points.len() >= 2,
            "Too few points: {} (at least 2 are required)",
            points.len()
        );
        anyhow::ensure!(
            points.len() == parameters.len(),
            "Invalid number of parameters: {} for {} points",
            parameters.len(),
            points.len()
        );
        anyhow::ensure!(
            parameters.windows(2).all(|w| w[0] < w[1]),
            "Parameters must be strictly increasing"
        );
        Ok(Self { points, parameters })
    }

    /// Create a new polyline whose vertices sit at parameters `0, 1, .., n - 1`.
    pub fn try_uniform(points: &[OPoint<T, D>]) -> anyhow::Result<Self> {
        let parameters = (0..points.len())
            .map(|i| T::from_literal(i as f64))
            .collect_vec();
        Self::try_new(points.to_vec(), parameters)
    }

    pub fn points(&self) -> &[OPoint<T, D>] {
        &self.points
    }

    pub fn parameters(&self) -> &[T] {
        &self.parameters
    }

    pub fn first_point(&self) -> &OPoint<T, D> {
        &self.points[0]
    }

    pub fn end_point(&self) -> &OPoint<T, D> {
        &self.points[self.points.len() - 1]
    }

    /// The parameter range of the polyline.
    pub fn domain(&self) -> Interval<T> {
        Interval::new(self.parameters[0], self.parameters[self.parameters.len() - 1])
    }

    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Iterate the segments together with the parameter range each one spans.
    pub fn segments(&self) -> impl Iterator<Item = (Segment<T, D>, Interval<T>)> + '_ {
        self.points
            .iter()
            .tuple_windows()
            .zip(self.parameters.iter().tuple_windows())
            .map(|((a, b), (u0, u1))| (Segment::new(a.clone(), b.clone()), Interval::new(*u0, *u1)))
    }

    /// Evaluate the point at parameter `t`.
    /// `t` is clamped to the domain.
    /// # Example
    /// ```
    /// use curve_difference::prelude::*;
    /// use nalgebra::Point2;
    ///
    /// let polyline = Polyline2D::try_uniform(&[
    ///     Point2::new(0., 0.),
    ///     Point2::new(2., 0.),
    ///     Point2::new(2., 4.),
    /// ]).unwrap();
    /// assert_eq!(polyline.point_at(0.5), Point2::new(1., 0.));
    /// assert_eq!(polyline.point_at(1.25), Point2::new(2., 1.));
    /// assert_eq!(polyline.point_at(3.), Point2::new(2., 4.));
    /// ```
    pub fn point_at(&self, t: T) -> OPoint<T, D> {
        let domain = self.domain();
        let t = t.clamp(domain.min(), domain.max());
        let index = self
            .parameters
            .partition_point(|u| *u <= t)
            .saturating_sub(1)
            .min(self.segment_count() - 1);
        let (u0, u1) = (self.parameters[index], self.parameters[index + 1]);
        let s = (t - u0) / (u1 - u0);
        Segment::new(self.points[index].clone(), self.points[index + 1].clone()).point_at(s)
    }
}

impl<T: FloatingPoint, D: DimName> ArcLengthParameter<T> for Polyline<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    fn try_length(&self) -> anyhow::Result<T> {
        Ok(self
            .segments()
            .fold(T::zero(), |acc, (segment, _)| acc + segment.length()))
    }

    /// Walk the segments until the accumulated length reaches `length`.
    /// Zero length segments are skipped, so the parameter at length `0` is the
    /// start of the first segment with a positive length.
    fn try_length_parameter(&self, length: T) -> anyhow::Result<CurveLengthParameter<T>> {
        let total = self.try_length()?;
        anyhow::ensure!(
            length >= T::zero() && length <= total,
            "Length {} is out of range [0, {}]",
            length,
            total
        );

        let mut acc = T::zero();
        for (segment, range) in self.segments() {
            let l = segment.length();
            if l > T::zero() && length <= acc + l {
                let s = ((length - acc) / l).clamp(T::zero(), T::one());
                let parameter = T::lerp(range.min(), range.max(), s);
                return Ok(CurveLengthParameter::new(parameter, length));
            }
            acc += l;
        }

        Ok(CurveLengthParameter::new(self.domain().max(), length))
    }
}

impl<'a, T: FloatingPoint, D: DimName> From<&'a Polyline<T, D>> for BoundingBox<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    fn from(value: &'a Polyline<T, D>) -> Self {
        Self::new_with_points(value.points().iter().cloned())
    }
}

impl<T: FloatingPoint, D: DimName> BoundingBoxOverlap<T> for Polyline<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    fn bounding_box_overlaps(&self, other: &Self, tolerance: Option<T>) -> bool {
        BoundingBox::from(self).intersects(&BoundingBox::from(other), tolerance)
    }
}
