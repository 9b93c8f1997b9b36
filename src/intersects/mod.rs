pub mod curve_intersection_event;
pub mod curve_intersection_tolerance;
pub mod intersection_polyline_polyline;

pub use curve_intersection_event::*;
pub use curve_intersection_tolerance::*;

/// Intersection between two objects trait
pub trait Intersects<'a, T> {
    type Output;
    type Option;

    fn find_intersection(&'a self, other: T, option: Self::Option) -> Self::Output;
}
