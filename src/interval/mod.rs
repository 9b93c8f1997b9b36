pub mod merge;
pub mod subtract;

pub use merge::*;
pub use subtract::*;

use std::fmt::Display;

use crate::misc::FloatingPoint;

/// A closed range `[min, max]` in the parameter domain of a curve.
/// The bounds are always ordered: constructing with `min > max` swaps them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    min: T,
    max: T,
}

impl<T: FloatingPoint> Interval<T> {
    /// Create a new interval from two bounds in any order.
    /// # Example
    /// ```
    /// use curve_difference::prelude::Interval;
    /// let interval = Interval::new(7., 3.);
    /// assert_eq!(interval.min(), 3.);
    /// assert_eq!(interval.max(), 7.);
    /// ```
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn length(&self) -> T {
        self.max - self.min
    }

    pub fn mid(&self) -> T {
        (self.min + self.max) * T::from_literal(0.5)
    }

    pub fn as_tuple(&self) -> (T, T) {
        (self.min, self.max)
    }

    /// Check if `t` lies in the closed interval.
    pub fn contains(&self, t: T) -> bool {
        self.min <= t && t <= self.max
    }

    /// Check if the interval spans no more than `tolerance`.
    pub fn is_degenerate(&self, tolerance: T) -> bool {
        self.length() <= tolerance
    }

    /// Check if the interiors of the two intervals overlap.
    /// Intervals sharing only an endpoint do not overlap.
    /// # Example
    /// ```
    /// use curve_difference::prelude::Interval;
    /// let a = Interval::new(0., 5.);
    /// assert!(a.overlaps(&Interval::new(4., 8.)));
    /// assert!(!a.overlaps(&Interval::new(5., 8.)));
    /// ```
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min < other.max && other.min < self.max
    }

    /// Check if the two intervals overlap or share an endpoint.
    pub fn touches(&self, other: &Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Restrict the interval to `bounds`.
    /// Returns `None` if the two are disjoint; an interval touching `bounds`
    /// at one end is clipped to that single point.
    pub fn clip(&self, bounds: &Self) -> Option<Self> {
        if !self.touches(bounds) {
            return None;
        }
        Some(Self {
            min: self.min.max(bounds.min),
            max: self.max.min(bounds.max),
        })
    }
}

impl<T: FloatingPoint> From<(T, T)> for Interval<T> {
    fn from(value: (T, T)) -> Self {
        Self::new(value.0, value.1)
    }
}

impl<T: Display> Display for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
