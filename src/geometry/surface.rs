use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Polynomial, Vector3, TOLERANCE};

/// Scala radius at the apex of the spiral, in millimeters.
const APEX_RADIUS: f64 = 0.6;

/// Additional scala radius at the base, tapering linearly to zero at the apex.
const BASE_TAPER: f64 = 0.5;

/// Local scala duct radius at winding angle `phi`: 1.1 mm at the base
/// shrinking linearly to 0.6 mm at the apex.
pub(crate) fn scala_radius(total_angle: f64, phi: f64) -> f64 {
    (total_angle - phi) / total_angle * BASE_TAPER + APEX_RADIUS
}

/// Parameter domain for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDomain {
    /// Start of the U parameter range.
    pub u_min: f64,
    /// End of the U parameter range.
    pub u_max: f64,
    /// Start of the V parameter range.
    pub v_min: f64,
    /// End of the V parameter range.
    pub v_max: f64,
}

impl SurfaceDomain {
    /// Creates a new surface domain.
    #[must_use]
    pub fn new(u_min: f64, u_max: f64, v_min: f64, v_max: f64) -> Self {
        Self {
            u_min,
            u_max,
            v_min,
            v_max,
        }
    }
}

/// Trait for parametric surfaces in 3D space.
pub trait Surface {
    /// Evaluates the surface at parameters `(u, v)`, returning the 3D point.
    ///
    /// # Errors
    ///
    /// Returns an error if evaluation fails.
    fn evaluate(&self, u: f64, v: f64) -> Result<Point3>;

    /// Computes the unit surface normal at parameters `(u, v)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is degenerate.
    fn normal(&self, u: f64, v: f64) -> Result<Vector3>;

    /// Returns the parameter domain of the surface.
    fn domain(&self) -> SurfaceDomain;
}

/// The scala wall surface swept along the spiral centerline.
///
/// `u` is the winding angle `phi`, `v` the circumferential angle around the
/// duct. With `r_s` the tapering scala radius,
/// `local_r = r(u) + r_s(u)*(cos v - 1)` and
/// `P(u, v) = (local_r*cos u, local_r*sin u, r_s(u)*sin v + h(u))`.
/// The wall touches the centerline at `v = 0` and bulges outward and upward
/// as `v` advances; the profile is deliberately asymmetric, not a centered
/// circular sweep.
#[derive(Debug, Clone)]
pub struct ScalaSurface {
    radius: Polynomial,
    height: Polynomial,
    radius_rate: Polynomial,
    height_rate: Polynomial,
    total_angle: f64,
}

impl ScalaSurface {
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

    /// Local scala duct radius at `phi`.
    #[must_use]
    pub fn scala_radius(&self, phi: f64) -> f64 {
        scala_radius(self.total_angle, phi)
    }
}

impl Surface for ScalaSurface {
    fn evaluate(&self, u: f64, v: f64) -> Result<Point3> {
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();
        let rs = scala_radius(self.total_angle, u);
        let local_r = self.radius.eval(u) + rs * (cv - 1.0);
        Ok(Point3::new(
            local_r * cu,
            local_r * su,
            rs * sv + self.height.eval(u),
        ))
    }

    fn normal(&self, u: f64, v: f64) -> Result<Vector3> {
        let (su, cu) = u.sin_cos();
        let (sv, cv) = v.sin_cos();
        let rs = scala_radius(self.total_angle, u);
        let rs_rate = -BASE_TAPER / self.total_angle;
        let local_r = self.radius.eval(u) + rs * (cv - 1.0);
        let local_r_du = self.radius_rate.eval(u) + rs_rate * (cv - 1.0);

        let d_u = Vector3::new(
            local_r_du * cu - local_r * su,
            local_r_du * su + local_r * cu,
            rs_rate * sv + self.height_rate.eval(u),
        );
        let d_v = Vector3::new(-rs * sv * cu, -rs * sv * su, rs * cv);

        let n = d_u.cross(&d_v);
        let len = n.norm();
        if len < TOLERANCE {
            return Err(GeometryError::DegenerateNormal.into());
        }
        Ok(n / len)
    }

    fn domain(&self) -> SurfaceDomain {
        SurfaceDomain::new(0.0, self.total_angle, 0.0, TAU)
    }
}
