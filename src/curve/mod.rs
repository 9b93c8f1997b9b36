pub mod curve_length_parameter;
pub mod polyline;
pub use curve_length_parameter::*;
pub use polyline::*;
