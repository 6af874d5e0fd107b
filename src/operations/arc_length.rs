use crate::error::Result;
use crate::geometry::CochleaModel;
use crate::math::quadrature::{adaptive_simpson, DEFAULT_TOLERANCE};

/// Measures the arc length of the cochlear centerline.
pub struct ArcLength {
    with_height: bool,
}

impl ArcLength {
    /// Creates the query. With `with_height` the full spatial curve is
    /// measured, without it only its projection onto the base plane.
    #[must_use]
    pub fn new(with_height: bool) -> Self {
        Self { with_height }
    }

    /// Executes the query, returning the length in model units.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::IntegrationError::NonFinite`] if the speed
    /// integrand cannot be evaluated.
    pub fn execute(&self, model: &CochleaModel) -> Result<f64> {
        let curve = model.centerline();
        let with_height = self.with_height;
        let speed = |phi: f64| {
            let velocity = curve.velocity(phi);
            if with_height {
                velocity.norm()
            } else {
                velocity.x.hypot(velocity.y)
            }
        };

        let length = adaptive_simpson(speed, 0.0, model.total_angle(), DEFAULT_TOLERANCE)?;
        log::debug!(
            "centerline arc length over {:.3} turns: {length:.6}",
            model.turn_count()
        );
        Ok(length)
    }
}
