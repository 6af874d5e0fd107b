use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::geometry::{CochleaModel, Curve};
use crate::math::Point3;

/// A sampled point on the cochlear centerline.
#[derive(Debug, Clone, Copy)]
pub struct PointSample {
    /// Position in model space.
    pub position: Point3,
    /// Distance from the spiral axis.
    pub radius: f64,
    /// Height above the base plane.
    pub height: f64,
    /// Winding angle in radians.
    pub phi: f64,
    /// Turns completed from the base.
    pub turns: f64,
}

/// Evaluates the centerline at a fraction of the full winding.
pub struct PointAt {
    turn_fraction: f64,
}

impl PointAt {
    /// Creates the query for a fraction in `[0, 1]`, where `0` is the base
    /// of the spiral and `1` the apex.
    #[must_use]
    pub fn new(turn_fraction: f64) -> Self {
        Self { turn_fraction }
    }

    /// Executes the query, returning the sampled point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::FractionOutOfRange`] when the fraction lies
    /// outside `[0, 1]`.
    pub fn execute(&self, model: &CochleaModel) -> Result<PointSample> {
        if !(0.0..=1.0).contains(&self.turn_fraction) {
            return Err(GeometryError::FractionOutOfRange(self.turn_fraction).into());
        }

        let phi = self.turn_fraction * model.total_angle();
        let position = model.centerline().evaluate(phi)?;
        Ok(PointSample {
            position,
            radius: model.radius_at(phi),
            height: model.height_at(phi),
            phi,
            turns: phi / TAU,
        })
    }
}
