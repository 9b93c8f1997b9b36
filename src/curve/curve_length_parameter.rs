/// A struct that contains the parameter of a curve and the arc length of the curve at that parameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveLengthParameter<T: Copy> {
    parameter: T,
    length: T,
}

impl<T: Copy> CurveLengthParameter<T> {
    pub fn new(parameter: T, length: T) -> Self {
        Self { parameter, length }
    }

    pub fn parameter(&self) -> T {
        self.parameter
    }

    pub fn length(&self) -> T {
        self.length
    }
}

/// Mapping between arc length and the native parameter of a curve.
pub trait ArcLengthParameter<T: Copy> {
    /// Total arc length of the curve.
    fn try_length(&self) -> anyhow::Result<T>;

    /// Find the parameter at which the arc length measured from the start equals `length`.
    /// # Failures
    /// - if `length` is negative or exceeds the total length
    fn try_length_parameter(&self, length: T) -> anyhow::Result<CurveLengthParameter<T>>;
}
