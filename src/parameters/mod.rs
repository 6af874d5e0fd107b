pub mod coefficients;

mod io;
mod sampler;

pub use sampler::{GenerationMode, ParameterSampler};

use crate::error::{ParameterError, Result};

/// Anatomical mean of the four shape parameters (A1, B1, A2, B2).
pub const ANATOMICAL_MEAN: [f64; 4] = [5.97, 3.95, 3.26, 2.85];

/// Valid range for a single shape parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParameterBounds {
    /// Field name as reported in errors ("A1".."B2").
    pub name: &'static str,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
}

/// Anatomical bounds for (A1, B1, A2, B2), in order.
pub const PARAMETER_BOUNDS: [ParameterBounds; 4] = [
    ParameterBounds {
        name: "A1",
        min: 4.0,
        max: 8.0,
    },
    ParameterBounds {
        name: "B1",
        min: 2.5,
        max: 5.5,
    },
    ParameterBounds {
        name: "A2",
        min: 2.0,
        max: 4.5,
    },
    ParameterBounds {
        name: "B2",
        min: 1.5,
        max: 4.0,
    },
];

/// The four validated cochlea shape parameters, in millimeters.
///
/// A1 is the base width, B1 the secondary base measurement, A2 the
/// mid-cochlea width and B2 the apical measurement. Values are checked
/// against [`PARAMETER_BOUNDS`] at construction and are immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameters {
    a1: f64,
    b1: f64,
    a2: f64,
    b2: f64,
}

impl ShapeParameters {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::OutOfBounds`] naming the first field whose
    /// value lies outside its anatomical range. NaN never passes the check.
    pub fn new(a1: f64, b1: f64, a2: f64, b2: f64) -> Result<Self> {
        let values = [a1, b1, a2, b2];
        for (value, bounds) in values.iter().zip(&PARAMETER_BOUNDS) {
            if !(bounds.min..=bounds.max).contains(value) {
                return Err(ParameterError::OutOfBounds {
                    parameter: bounds.name,
                    value: *value,
                    min: bounds.min,
                    max: bounds.max,
                }
                .into());
            }
        }
        Ok(Self { a1, b1, a2, b2 })
    }

    /// Creates a validated parameter set from a slice of values.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Arity`] unless exactly 4 values are given,
    /// then validates bounds as [`ShapeParameters::new`] does.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [a1, b1, a2, b2] => Self::new(a1, b1, a2, b2),
            _ => Err(ParameterError::Arity { got: values.len() }.into()),
        }
    }

    /// Returns the fixed anatomical-mean parameter set.
    #[must_use]
    pub fn mean() -> Self {
        Self {
            a1: ANATOMICAL_MEAN[0],
            b1: ANATOMICAL_MEAN[1],
            a2: ANATOMICAL_MEAN[2],
            b2: ANATOMICAL_MEAN[3],
        }
    }

    /// Base width A1.
    #[must_use]
    pub fn a1(&self) -> f64 {
        self.a1
    }

    /// Secondary base measurement B1.
    #[must_use]
    pub fn b1(&self) -> f64 {
        self.b1
    }

    /// Mid-cochlea width A2.
    #[must_use]
    pub fn a2(&self) -> f64 {
        self.a2
    }

    /// Apical measurement B2.
    #[must_use]
    pub fn b2(&self) -> f64 {
        self.b2
    }

    /// Returns the parameters as an array `[A1, B1, A2, B2]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 4] {
        [self.a1, self.b1, self.a2, self.b2]
    }

    /// Returns the design vector `{1, A1, B1, A2, B2}` dotted against the
    /// regression tables in [`coefficients`].
    #[must_use]
    pub fn design_vector(&self) -> [f64; 5] {
        [1.0, self.a1, self.b1, self.a2, self.b2]
    }
}
