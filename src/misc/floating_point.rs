use nalgebra::{convert, RealField};
use num_traits::ToPrimitive;

/// Trait for floating point types (f32, f64)
/// Used as the scalar of parameters, lengths and coordinates alike
pub trait FloatingPoint: RealField + ToPrimitive + Copy {
    /// Linear interpolation between `a` and `b` at `t` in [0, 1].
    fn lerp(a: Self, b: Self, t: Self) -> Self {
        a + (b - a) * t
    }

    /// Convert a `f64` literal into the scalar type.
    fn from_literal(value: f64) -> Self {
        convert(value)
    }
}

impl FloatingPoint for f32 {}
impl FloatingPoint for f64 {}
