use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::geometry::{CochleaModel, Curve, Surface};
use crate::math::Point3;

use super::{Geometry, SurfaceGrid};

/// Default angular step for geometry generation, in radians.
pub const DEFAULT_RESOLUTION: f64 = 0.1;

/// Samples a model into a [`Geometry`].
pub struct GenerateGeometry {
    resolution: f64,
}

impl GenerateGeometry {
    /// Creates the operation with the given angular step in radians.
    #[must_use]
    pub fn new(resolution: f64) -> Self {
        Self { resolution }
    }

    /// Executes the sampling.
    ///
    /// Phi runs half-open over `[0, total_angle)` in `resolution` steps, the
    /// circumferential angle over `[0, 2 pi)` with the same step. The surface
    /// grid is filled row-major: rows around the duct, columns along the
    /// spiral.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidResolution`] unless the resolution is
    /// finite and positive.
    pub fn execute(&self, model: &CochleaModel) -> Result<Geometry> {
        if !self.resolution.is_finite() || self.resolution <= 0.0 {
            return Err(GeometryError::InvalidResolution(self.resolution).into());
        }

        let cols = sample_count(model.total_angle(), self.resolution);
        let rows = sample_count(TAU, self.resolution);

        #[allow(clippy::cast_precision_loss)]
        let phi: Vec<f64> = (0..cols).map(|i| i as f64 * self.resolution).collect();

        let curve = model.centerline();
        let surface = model.scala_surface();

        let centerline = sample_curve(&curve, &phi)?;
        let radii: Vec<f64> = phi.iter().map(|&p| model.radius_at(p)).collect();

        let mut points = Vec::with_capacity(rows * cols);
        for j in 0..rows {
            #[allow(clippy::cast_precision_loss)]
            let v = j as f64 * self.resolution;
            for &p in &phi {
                points.push(surface.evaluate(p, v)?);
            }
        }

        log::debug!("sampled {cols} centerline points and a {rows}x{cols} surface grid");

        Ok(Geometry {
            phi,
            centerline,
            radii,
            surface: SurfaceGrid { rows, cols, points },
        })
    }
}

impl Default for GenerateGeometry {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLUTION)
    }
}

/// Number of half-open samples covering `span` at the given step.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sample_count(span: f64, step: f64) -> usize {
    (span / step).ceil() as usize
}

/// Samples a curve at the given parameter values.
fn sample_curve(curve: &dyn Curve, params: &[f64]) -> Result<Vec<Point3>> {
    params.iter().map(|&t| curve.evaluate(t)).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use crate::parameters::ShapeParameters;

    fn mean_model() -> CochleaModel {
        CochleaModel::new(ShapeParameters::mean()).unwrap()
    }

    #[test]
    fn sample_count_is_ceil_of_span_over_step() {
        let model = mean_model();
        for &resolution in &[0.1, 0.25, 1.0] {
            let geometry = GenerateGeometry::new(resolution).execute(&model).unwrap();
            #[allow(clippy::cast_precision_loss)]
            let expected = (model.total_angle() / resolution).ceil() as usize;
            assert_eq!(geometry.len(), expected);
        }
    }

    #[test]
    fn phi_samples_are_half_open_and_uniform() {
        let model = mean_model();
        let resolution = 0.25;
        let geometry = GenerateGeometry::new(resolution).execute(&model).unwrap();
        assert!(geometry.phi[0].abs() < TOLERANCE);
        assert!(*geometry.phi.last().unwrap() < model.total_angle());
        for pair in geometry.phi.windows(2) {
            assert!((pair[1] - pair[0] - resolution).abs() < TOLERANCE);
        }
    }

    #[test]
    fn centerline_and_radii_match_the_model() {
        let model = mean_model();
        let geometry = GenerateGeometry::new(0.25).execute(&model).unwrap();
        let curve = model.centerline();
        for (i, &phi) in geometry.phi.iter().enumerate() {
            let expected = curve.evaluate(phi).unwrap();
            assert!((geometry.centerline[i] - expected).norm() < TOLERANCE);
            assert!((geometry.radii[i] - model.radius_at(phi)).abs() < TOLERANCE);
        }
    }

    #[test]
    fn grid_dimensions_cover_the_duct() {
        let model = mean_model();
        let resolution = 0.25;
        let geometry = GenerateGeometry::new(resolution).execute(&model).unwrap();
        let grid = &geometry.surface;
        #[allow(clippy::cast_precision_loss)]
        let expected_rows = (TAU / resolution).ceil() as usize;
        assert_eq!(grid.rows, expected_rows);
        assert_eq!(grid.cols, geometry.len());
        assert_eq!(grid.points.len(), grid.rows * grid.cols);
    }

    #[test]
    fn first_grid_row_lies_on_the_centerline() {
        let model = mean_model();
        let geometry = GenerateGeometry::new(0.25).execute(&model).unwrap();
        for (i, point) in geometry.centerline.iter().enumerate() {
            assert!((geometry.surface.point(0, i) - point).norm() < TOLERANCE);
        }
    }

    #[test]
    fn grid_matches_surface_evaluation() {
        let model = mean_model();
        let resolution = 0.5;
        let geometry = GenerateGeometry::new(resolution).execute(&model).unwrap();
        let surface = model.scala_surface();
        for row in [0, 3, geometry.surface.rows - 1] {
            #[allow(clippy::cast_precision_loss)]
            let v = row as f64 * resolution;
            for (col, &phi) in geometry.phi.iter().enumerate() {
                let expected = surface.evaluate(phi, v).unwrap();
                assert!((geometry.surface.point(row, col) - expected).norm() < TOLERANCE);
            }
        }
    }

    #[test]
    fn turns_per_sample() {
        let model = mean_model();
        let geometry = GenerateGeometry::new(0.5).execute(&model).unwrap();
        let turns = geometry.turns();
        assert_eq!(turns.len(), geometry.len());
        for (turn, phi) in turns.iter().zip(&geometry.phi) {
            assert!((turn - phi / TAU).abs() < TOLERANCE);
        }
    }

    #[test]
    fn invalid_resolutions_are_rejected() {
        let model = mean_model();
        for resolution in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let result = GenerateGeometry::new(resolution).execute(&model);
            assert!(result.is_err(), "resolution {resolution} should fail");
        }
    }

    #[test]
    fn default_resolution_is_a_tenth_radian() {
        let model = mean_model();
        let geometry = GenerateGeometry::default().execute(&model).unwrap();
        #[allow(clippy::cast_precision_loss)]
        let expected = (model.total_angle() / DEFAULT_RESOLUTION).ceil() as usize;
        assert_eq!(geometry.len(), expected);
    }
}
