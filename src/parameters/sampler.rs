use std::str::FromStr;

use nalgebra::Cholesky;
use rand::prelude::*;
use rand_distr::StandardNormal;

use crate::error::{CochlisError, ParameterError, Result};
use crate::math::{Matrix4, Vector4};

use super::{ShapeParameters, ANATOMICAL_MEAN};

/// Standard deviations of the four shape parameters, matching
/// [`ANATOMICAL_MEAN`] slot for slot.
const PARAMETER_SPREAD: [f64; 4] = [0.36, 0.35, 0.28, 0.33];

/// How a parameter set is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// The fixed anatomical-mean parameter set.
    Mean,
    /// Normal draws around the anatomical means.
    Random,
}

impl FromStr for GenerationMode {
    type Err = CochlisError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "mean" => Ok(Self::Mean),
            "random" => Ok(Self::Random),
            other => Err(ParameterError::InvalidMode(other.to_owned()).into()),
        }
    }
}

/// Produces shape-parameter sets, either fixed or randomly sampled.
///
/// The sampler owns its RNG. [`ParameterSampler::from_seed`] gives a
/// reproducible draw sequence for tests; [`ParameterSampler::new`] seeds from
/// OS entropy.
#[derive(Debug)]
pub struct ParameterSampler {
    rng: StdRng,
}

impl ParameterSampler {
    /// Creates a sampler seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a sampler with a fixed seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produces a parameter set for the given mode.
    ///
    /// # Errors
    ///
    /// Random draws are validated against the anatomical bounds; a draw
    /// landing outside them (the bounds sit 3.5 sigma and further out)
    /// surfaces [`ParameterError::OutOfBounds`].
    pub fn generate(&mut self, mode: GenerationMode) -> Result<ShapeParameters> {
        match mode {
            GenerationMode::Mean => {
                log::debug!("using anatomical mean parameters");
                Ok(ShapeParameters::mean())
            }
            GenerationMode::Random => {
                let values = self.draw();
                log::debug!("sampled random parameters {values:?}");
                ShapeParameters::from_slice(&values)
            }
        }
    }

    /// Draws one random parameter set.
    fn draw(&mut self) -> [f64; 4] {
        // TODO: derive the returned values from the correlated sample instead
        // of discarding it; the independent draws below ignore the measured
        // cross-correlations entirely.
        let _correlated = self.correlated_sample();

        let mut values = [0.0; 4];
        for ((value, mean), spread) in values
            .iter_mut()
            .zip(&ANATOMICAL_MEAN)
            .zip(&PARAMETER_SPREAD)
        {
            *value = mean + spread * self.standard_normal();
        }
        values
    }

    /// Draws a multivariate-normal sample with mean 1 and the measured
    /// parameter correlation matrix as covariance.
    ///
    /// Returns `None` if the correlation matrix has no Cholesky factor; the
    /// fixed matrix is positive-definite, so this does not happen in practice.
    fn correlated_sample(&mut self) -> Option<Vector4> {
        let chol = Cholesky::new(parameter_correlation())?;
        let z = Vector4::from_fn(|_, _| self.standard_normal());
        Some(Vector4::repeat(1.0) + chol.l() * z)
    }

    fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }
}

impl Default for ParameterSampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Measured correlation matrix of (A1, B1, A2, B2).
#[allow(clippy::unreadable_literal)]
fn parameter_correlation() -> Matrix4 {
    Matrix4::new(
        1.0, 0.53476, -0.12441, -0.07296, //
        0.53476, 1.0, 0.11668, -0.43748, //
        -0.12441, 0.11668, 1.0, 0.57846, //
        -0.07296, -0.43748, 0.57846, 1.0,
    )
}
