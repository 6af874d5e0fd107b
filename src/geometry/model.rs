use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::Polynomial;
use crate::parameters::coefficients::{HEIGHT, MODIOLUS, TURNS};
use crate::parameters::ShapeParameters;

use super::curve::SpiralCurve;
use super::surface::{self, ScalaSurface};

/// A parametric cochlea model derived from validated shape parameters.
///
/// Construction dots the design vector `{1, A1, B1, A2, B2}` against the
/// fixed regression tables, producing the modiolus-radius and height
/// polynomials of the spiral and the total winding angle. All queries are
/// pure functions of this immutable state.
#[derive(Debug, Clone)]
pub struct CochleaModel {
    parameters: ShapeParameters,
    radius_poly: Polynomial,
    height_poly: Polynomial,
    total_angle: f64,
}

impl CochleaModel {
    /// Builds the model for the given parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateSpiral`] if the turns regression
    /// yields a non-positive turn estimate. In-bounds parameters always give
    /// roughly 2 to 3 turns; the check guards the invariant, not a reachable
    /// input.
    pub fn new(parameters: ShapeParameters) -> Result<Self> {
        let design = parameters.design_vector();
        let radius_poly = combine(&design, &MODIOLUS);
        let height_poly = combine(&design, &HEIGHT);

        let scaled: f64 = design.iter().zip(&TURNS).map(|(d, w)| d * w).sum();
        let turns = scaled / 360.0;
        if turns <= 0.0 {
            return Err(GeometryError::DegenerateSpiral { turns }.into());
        }

        log::debug!(
            "cochlea model: A1={:.3} B1={:.3} A2={:.3} B2={:.3} -> {turns:.3} turns",
            parameters.a1(),
            parameters.b1(),
            parameters.a2(),
            parameters.b2(),
        );

        Ok(Self {
            parameters,
            radius_poly,
            height_poly,
            total_angle: turns * TAU,
        })
    }

    /// Returns the shape parameters the model was built from.
    #[must_use]
    pub fn parameters(&self) -> &ShapeParameters {
        &self.parameters
    }

    /// Returns the modiolus-radius polynomial in the winding angle.
    #[must_use]
    pub fn radius_poly(&self) -> &Polynomial {
        &self.radius_poly
    }

    /// Returns the height polynomial in the winding angle.
    #[must_use]
    pub fn height_poly(&self) -> &Polynomial {
        &self.height_poly
    }

    /// Upper bound of the winding angle `phi` over which the spiral is
    /// defined, in radians.
    #[must_use]
    pub fn total_angle(&self) -> f64 {
        self.total_angle
    }

    /// Number of turns of the spiral, `total_angle / 2 pi`.
    #[must_use]
    pub fn turn_count(&self) -> f64 {
        self.total_angle / TAU
    }

    /// Distance from the modiolus axis to the centerline at `phi`, in mm.
    #[must_use]
    pub fn radius_at(&self, phi: f64) -> f64 {
        self.radius_poly.eval(phi)
    }

    /// Height of the centerline at `phi`, in mm.
    #[must_use]
    pub fn height_at(&self, phi: f64) -> f64 {
        self.height_poly.eval(phi)
    }

    /// Local scala duct radius at `phi`: 1.1 mm at the base tapering
    /// linearly to 0.6 mm at the apex.
    #[must_use]
    pub fn scala_radius(&self, phi: f64) -> f64 {
        surface::scala_radius(self.total_angle, phi)
    }

    /// Returns the analytic centerline curve.
    #[must_use]
    pub fn centerline(&self) -> SpiralCurve {
        SpiralCurve::new(
            self.radius_poly.clone(),
            self.height_poly.clone(),
            self.total_angle,
        )
    }

    /// Returns the analytic scala wall surface.
    #[must_use]
    pub fn scala_surface(&self) -> ScalaSurface {
        ScalaSurface::new(
            self.radius_poly.clone(),
            self.height_poly.clone(),
            self.total_angle,
        )
    }
}

/// Dots the design vector with each table column and reorders the resulting
/// coefficients from ascending powers to highest degree first.
fn combine<const N: usize>(design: &[f64; 5], table: &[[f64; N]; 5]) -> Polynomial {
    let mut coefficients = vec![0.0; N];
    for (weight, row) in design.iter().zip(table) {
        for (slot, value) in coefficients.iter_mut().zip(row) {
            *slot += weight * value;
        }
    }
    coefficients.reverse();
    Polynomial::new(coefficients)
}
