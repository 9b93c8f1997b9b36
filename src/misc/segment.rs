use nalgebra::{allocator::Allocator, DefaultAllocator, DimName, OPoint, OVector};

use crate::{bounding_box::BoundingBox, interval::Interval, misc::FloatingPoint};

/// A straight segment between two points in D space.
/// Positions along the segment are expressed by a local parameter in [0, 1].
#[derive(Clone, Debug)]
pub struct Segment<T: FloatingPoint, D: DimName>
where
    DefaultAllocator: Allocator<D>,
{
    pub a: OPoint<T, D>,
    pub b: OPoint<T, D>,
}

impl<T: FloatingPoint, D: DimName> Segment<T, D>
where
    DefaultAllocator: Allocator<D>,
{
    pub fn new(a: OPoint<T, D>, b: OPoint<T, D>) -> Self {
        Self { a, b }
    }

    pub fn direction(&self) -> OVector<T, D> {
        &self.b - &self.a
    }

    pub fn length(&self) -> T {
        self.direction().norm()
    }

    pub fn is_degenerate(&self) -> bool {
        self.direction().norm_squared() <= T::default_epsilon()
    }

    /// Point at local parameter `s`.
    pub fn point_at(&self, s: T) -> OPoint<T, D> {
        &self.a + self.direction() * s
    }

    /// Local parameter of the orthogonal projection of `point` onto the supporting line.
    /// The result is not clamped to [0, 1].
    pub fn project(&self, point: &OPoint<T, D>) -> T {
        let dir = self.direction();
        let len2 = dir.norm_squared();
        if len2 <= T::default_epsilon() {
            return T::zero();
        }
        (point - &self.a).dot(&dir) / len2
    }

    /// Distance from `point` to the infinite line through the segment.
    pub fn distance_to_line(&self, point: &OPoint<T, D>) -> T {
        let s = self.project(point);
        (point - self.point_at(s)).norm()
    }

    pub fn bounding_box(&self) -> BoundingBox<T, D> {
        BoundingBox::new(self.a.coords.clone(), self.b.coords.clone())
    }

    /// Local parameters `(s, t)` of the closest points between `self` and `other`.
    /// Reference: Real-Time Collision Detection, 5.1.9
    pub fn closest_parameters(&self, other: &Self) -> (T, T) {
        let eps = T::default_epsilon();
        let zero = T::zero();
        let one = T::one();

        let d1 = self.direction();
        let d2 = other.direction();
        let r = &self.a - &other.a;
        let a = d1.norm_squared();
        let e = d2.norm_squared();
        let f = d2.dot(&r);

        if a <= eps && e <= eps {
            return (zero, zero);
        }
        if a <= eps {
            return (zero, (f / e).clamp(zero, one));
        }

        let c = d1.dot(&r);
        if e <= eps {
            return ((-c / a).clamp(zero, one), zero);
        }

        let b = d1.dot(&d2);
        let denom = a * e - b * b;
        let s = if denom > zero {
            ((b * f - c * e) / denom).clamp(zero, one)
        } else {
            // parallel segments
            zero
        };

        let t = (b * s + f) / e;
        if t < zero {
            ((-c / a).clamp(zero, one), zero)
        } else if t > one {
            (((b - c) / a).clamp(zero, one), one)
        } else {
            (s, t)
        }
    }

    /// Find the shared stretch of two collinear segments.
    /// Returns the local parameter ranges on `self` and `other`,
    /// or `None` if the segments are not collinear within `tolerance`
    /// or share a stretch no longer than `tolerance`.
    pub fn collinear_overlap(&self, other: &Self, tolerance: T) -> Option<(Interval<T>, Interval<T>)> {
        if self.is_degenerate() || other.is_degenerate() {
            return None;
        }

        if self.distance_to_line(&other.a) > tolerance || self.distance_to_line(&other.b) > tolerance {
            return None;
        }

        let unit = Interval::new(T::zero(), T::one());
        let on_self = Interval::new(self.project(&other.a), self.project(&other.b)).clip(&unit)?;
        if on_self.length() * self.length() <= tolerance {
            return None;
        }

        let on_other = Interval::new(
            other.project(&self.point_at(on_self.min())),
            other.project(&self.point_at(on_self.max())),
        )
        .clip(&unit)?;

        Some((on_self, on_other))
    }
}
