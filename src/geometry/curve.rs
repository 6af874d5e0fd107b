use crate::error::{GeometryError, Result};
use crate::math::{Point3, Polynomial, Vector3, TOLERANCE};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves in 3D space.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, t: f64) -> Result<Point3>;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is degenerate.
    fn tangent(&self, t: f64) -> Result<Vector3>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}

/// The cochlear spiral centerline.
///
/// Parameterized by the winding angle `phi` in radians:
/// `P(phi) = (r(phi)*cos(phi), r(phi)*sin(phi), h(phi))`, with `r` the
/// modiolus-radius polynomial and `h` the height polynomial.
#[derive(Debug, Clone)]
pub struct SpiralCurve {
    radius: Polynomial,
    height: Polynomial,
    radius_rate: Polynomial,
    height_rate: Polynomial,
    total_angle: f64,
}

impl SpiralCurve {
    /// Builds the centerline from the model polynomials. Derivatives are
    /// precomputed here so repeated velocity evaluation stays allocation-free.
    pub(crate) fn new(radius: Polynomial, height: Polynomial, total_angle: f64) -> Self {
        let radius_rate = radius.derivative();
        let height_rate = height.derivative();
        Self {
            radius,
            height,
            radius_rate,
            height_rate,
            total_angle,
        }
    }

    /// Derivative of the centerline with respect to `phi`.
    ///
    /// The planar components follow from the product rule on
    /// `r(phi)*cos(phi)` and `r(phi)*sin(phi)`; the speed `|velocity|` is the
    /// arc-length integrand.
    #[must_use]
    pub fn velocity(&self, phi: f64) -> Vector3 {
        let (sin, cos) = phi.sin_cos();
        let r = self.radius.eval(phi);
        let dr = self.radius_rate.eval(phi);
        Vector3::new(
            dr * cos - r * sin,
            dr * sin + r * cos,
            self.height_rate.eval(phi),
        )
    }

    /// Upper bound of the winding angle, in radians.
    #[must_use]
    pub fn total_angle(&self) -> f64 {
        self.total_angle
    }
}

impl Curve for SpiralCurve {
    fn evaluate(&self, phi: f64) -> Result<Point3> {
        let (sin, cos) = phi.sin_cos();
        let r = self.radius.eval(phi);
        Ok(Point3::new(r * cos, r * sin, self.height.eval(phi)))
    }

    fn tangent(&self, phi: f64) -> Result<Vector3> {
        let velocity = self.velocity(phi);
        let speed = velocity.norm();
        if speed < TOLERANCE {
            return Err(GeometryError::DegenerateTangent { length: speed }.into());
        }
        Ok(velocity / speed)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.total_angle)
    }

    fn is_closed(&self) -> bool {
        false
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::CochleaModel;
    use crate::parameters::ShapeParameters;

    fn mean_model() -> CochleaModel {
        CochleaModel::new(ShapeParameters::mean()).unwrap()
    }

    #[test]
    fn start_point_matches_polynomial_constants() {
        let model = mean_model();
        let p = model.centerline().evaluate(0.0).unwrap();
        assert!((p.x - model.radius_at(0.0)).abs() < TOLERANCE);
        assert!(p.y.abs() < TOLERANCE);
        assert!((p.z - model.height_at(0.0)).abs() < TOLERANCE);
    }

    #[test]
    fn position_angle_equals_phi() {
        let model = mean_model();
        let curve = model.centerline();
        for &phi in &[0.3, 0.7, 1.9, 3.0] {
            let p = curve.evaluate(phi).unwrap();
            assert!((p.y.atan2(p.x) - phi).abs() < 1e-9, "angle mismatch at phi={phi}");
        }
    }

    #[test]
    fn axis_distance_equals_radius_polynomial() {
        let model = mean_model();
        let curve = model.centerline();
        for &phi in &[0.0, 1.0, 4.0, 9.0] {
            let p = curve.evaluate(phi).unwrap();
            assert!((p.x.hypot(p.y) - model.radius_at(phi)).abs() < 1e-9);
        }
    }

    #[test]
    fn velocity_matches_finite_difference() {
        let curve = mean_model().centerline();
        let h = 1e-6;
        for &phi in &[0.5, 2.0, 5.0, 10.0] {
            let forward = curve.evaluate(phi + h).unwrap();
            let backward = curve.evaluate(phi - h).unwrap();
            let numeric = (forward - backward) / (2.0 * h);
            assert!((curve.velocity(phi) - numeric).norm() < 1e-5);
        }
    }

    #[test]
    fn tangent_is_unit_length() {
        let curve = mean_model().centerline();
        for &phi in &[0.0, 1.5, 8.0] {
            let t = curve.tangent(phi).unwrap();
            assert!((t.norm() - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn domain_covers_the_spiral() {
        let model = mean_model();
        let domain = model.centerline().domain();
        assert!(domain.t_min.abs() < TOLERANCE);
        assert!((domain.t_max - model.total_angle()).abs() < TOLERANCE);
        assert!(!model.centerline().is_closed());
    }
}
