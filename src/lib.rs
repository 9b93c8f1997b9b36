#![allow(clippy::needless_range_loop)]

#[macro_use]
mod logging;

mod bounding_box;
mod curve;
mod difference;
mod interval;
mod intersects;
mod misc;
mod trim;

pub mod prelude {
    pub use crate::bounding_box::*;
    pub use crate::curve::*;
    pub use crate::difference::*;
    pub use crate::interval::*;
    pub use crate::intersects::*;
    pub use crate::misc::*;
    pub use crate::trim::*;
}
