pub mod floating_point;
pub mod segment;

pub use floating_point::*;
pub use segment::*;
