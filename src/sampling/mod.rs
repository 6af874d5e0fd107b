mod cross_section;
mod generate;

pub use cross_section::{FrameSections, RadialSections};
pub use generate::{GenerateGeometry, DEFAULT_RESOLUTION};

use std::f64::consts::TAU;

use crate::math::Point3;

/// Sampled cochlea geometry: centerline, per-sample scalars and the scala
/// wall surface grid.
///
/// Produced by [`GenerateGeometry`] and never mutated afterwards. All
/// per-sample arrays share the same phi indexing.
#[derive(Debug, Clone, Default)]
pub struct Geometry {
    /// Winding-angle samples, ascending, half-open over `[0, total_angle)`.
    pub phi: Vec<f64>,
    /// Centerline point per sample, in millimeters.
    pub centerline: Vec<Point3>,
    /// Modiolus radius per sample.
    pub radii: Vec<f64>,
    /// Scala wall surface samples.
    pub surface: SurfaceGrid,
}

impl Geometry {
    /// Number of phi samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phi.len()
    }

    /// Returns whether the geometry holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phi.is_empty()
    }

    /// Completed turns per sample, `phi / 2 pi`.
    #[must_use]
    pub fn turns(&self) -> Vec<f64> {
        self.phi.iter().map(|phi| phi / TAU).collect()
    }
}

/// Row-major grid of surface samples; rows run around the duct
/// circumference, columns along the spiral.
#[derive(Debug, Clone, Default)]
pub struct SurfaceGrid {
    /// Number of circumferential samples.
    pub rows: usize,
    /// Number of samples along the spiral.
    pub cols: usize,
    /// `rows * cols` points, row-major.
    pub points: Vec<Point3>,
}

impl SurfaceGrid {
    /// Returns the sample at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    #[must_use]
    pub fn point(&self, row: usize, col: usize) -> &Point3 {
        assert!(row < self.rows && col < self.cols);
        &self.points[row * self.cols + col]
    }
}

/// A circular cross-section of the scala duct at one centerline station.
#[derive(Debug, Clone)]
pub struct CrossSection {
    /// Centerline point the ring is built around.
    pub center: Point3,
    /// Local scala radius at the station, in millimeters.
    pub radius: f64,
    /// Winding angle of the station, in radians.
    pub phi: f64,
    /// Closed boundary ring; the first point is repeated at the end.
    pub points: Vec<Point3>,
}
