use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint, OVector};

use crate::misc::FloatingPoint;

/// A struct representing an axis-aligned bounding box in D space.
#[derive(Clone, Debug)]
pub struct BoundingBox<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    min: OVector<T, D>,
    max: OVector<T, D>,
}

impl<T: FloatingPoint, D: DimName> BoundingBox<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    /// Create a new bounding box from two opposite corners in any order.
    pub fn new(a: OVector<T, D>, b: OVector<T, D>) -> Self {
        let mut min = a.clone();
        let mut max = a;
        for i in 0..D::dim() {
            min[i] = min[i].min(b[i]);
            max[i] = max[i].max(b[i]);
        }
        BoundingBox { min, max }
    }

    /// Create a new bounding box from point iterator.
    /// An empty iterator yields an inverted box that intersects nothing.
    pub fn new_with_points<I: IntoIterator<Item = OPoint<T, D>>>(iter: I) -> Self {
        let far = T::max_value().unwrap_or_else(|| T::from_literal(f64::MAX));
        let mut min = OVector::<T, D>::from_element(far);
        let mut max = -min.clone();

        for point in iter {
            for i in 0..D::dim() {
                min[i] = min[i].min(point[i]);
                max[i] = max[i].max(point[i]);
            }
        }

        Self { min, max }
    }

    pub fn min(&self) -> &OVector<T, D> {
        &self.min
    }

    pub fn max(&self) -> &OVector<T, D> {
        &self.max
    }

    pub fn center(&self) -> OVector<T, D> {
        (&self.min + &self.max) * T::from_literal(0.5)
    }

    pub fn size(&self) -> OVector<T, D> {
        &self.max - &self.min
    }

    /// Check if the bounding box intersects with another bounding box.
    /// Both boxes are inflated by `tolerance` (default: machine epsilon),
    /// so boxes closer than the tolerance are reported as intersecting.
    ///
    /// # Examples
    /// ```
    /// use nalgebra::Vector3;
    /// use curve_difference::prelude::BoundingBox;
    ///
    /// let b0 = BoundingBox::new(Vector3::from_element(0.), Vector3::from_element(1.));
    /// assert!(b0.intersects(&b0, None));
    ///
    /// let eps = 1e-6;
    /// let b1 = BoundingBox::new(Vector3::from_element(0.5), Vector3::from_element(1.5));
    /// assert!(b0.intersects(&b1, None));
    ///
    /// let b2 = BoundingBox::new(Vector3::from_element(1. + eps), Vector3::from_element(2. + eps));
    /// assert!(!b0.intersects(&b2, None));
    /// assert!(b0.intersects(&b2, Some(eps)));
    /// ```
    pub fn intersects(&self, other: &Self, tolerance: Option<T>) -> bool {
        let tolerance = tolerance.unwrap_or(T::default_epsilon());
        for i in 0..D::dim() {
            let a0 = self.min[i] - tolerance;
            let a1 = self.max[i] + tolerance;
            let b0 = other.min[i] - tolerance;
            let b1 = other.max[i] + tolerance;

            // disjoint along this axis
            if b0 > a1 || a0 > b1 {
                return false;
            }
        }

        true
    }

    /// Check if the bounding box contains a point.
    /// # Examples
    /// ```
    /// use nalgebra::{Point2, Vector2};
    /// use curve_difference::prelude::BoundingBox;
    /// let bb = BoundingBox::new(Vector2::new(0., 0.), Vector2::new(1., 1.));
    /// assert!(bb.contains(&Point2::new(0.5, 0.5)));
    /// assert!(bb.contains(&Point2::new(0., 1.0)));
    /// assert!(!bb.contains(&Point2::new(-1e-8, 0.5)));
    /// ```
    pub fn contains(&self, point: &OPoint<T, D>) -> bool {
        (0..D::dim()).all(|i| self.min[i] <= point[i] && point[i] <= self.max[i])
    }
}

impl<T: FloatingPoint, D: DimName> FromIterator<OPoint<T, D>> for BoundingBox<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    fn from_iter<I: IntoIterator<Item = OPoint<T, D>>>(iter: I) -> Self {
        Self::new_with_points(iter)
    }
}

/// Conservative overlap test between the bounding boxes of two objects.
/// Used as a fast reject: it may report overlap for objects that do not
/// intersect, but never the other way around.
pub trait BoundingBoxOverlap<T, Rhs: ?Sized = Self> {
    fn bounding_box_overlaps(&self, other: &Rhs, tolerance: Option<T>) -> bool;
}
