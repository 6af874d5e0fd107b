use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::geometry::CochleaModel;
use crate::math::{Point3, SectionFrame};

use super::{CrossSection, Geometry};

/// Points around an axis-aligned ring, excluding the closing point.
const RADIAL_RING_POINTS: usize = 16;

/// Points around a frame-aligned ring, excluding the closing point.
const FRAME_RING_POINTS: usize = 60;

/// Extracts axis-aligned cross-sections over the basal half of a geometry.
///
/// Each ring lies in the vertical plane through the spiral axis and the
/// section center, mirroring the duct surface parametrization at fixed
/// winding angle. The ring touches the centerline and extends inward,
/// toward the axis.
pub struct RadialSections {
    count: usize,
}

impl RadialSections {
    /// Creates the operation for the given number of sections.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Executes the extraction.
    ///
    /// Sections are placed at evenly spaced sample indices over the first
    /// half of the centerline. The geometry must have been sampled from the
    /// given model.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyGeometry`] when the geometry holds no
    /// samples.
    pub fn execute(&self, model: &CochleaModel, geometry: &Geometry) -> Result<Vec<CrossSection>> {
        if geometry.is_empty() {
            return Err(GeometryError::EmptyGeometry.into());
        }

        let half = (geometry.len() / 2).max(1);
        let mut sections = Vec::with_capacity(self.count);
        for k in 0..self.count {
            let index = spaced_index(k, self.count, half);
            let phi = geometry.phi[index];
            let center = geometry.centerline[index];
            sections.push(radial_ring(&center, model.scala_radius(phi), phi));
        }
        Ok(sections)
    }
}

/// Extracts frame-aligned cross-sections at fractional positions along a
/// geometry.
///
/// Each ring is a true circle of the local duct radius, centered on the
/// spiral and oriented perpendicular to its tangent.
pub struct FrameSections {
    positions: Vec<f64>,
}

impl FrameSections {
    /// Creates the operation for the given positions, each a fraction of the
    /// centerline in `[0, 1]`.
    #[must_use]
    pub fn new(positions: Vec<f64>) -> Self {
        Self { positions }
    }

    /// Creates the operation with `count` positions spread evenly from base
    /// to apex.
    #[must_use]
    pub fn evenly_spaced(count: usize) -> Self {
        let positions = match count {
            0 => Vec::new(),
            1 => vec![0.0],
            _ => {
                #[allow(clippy::cast_precision_loss)]
                let step = 1.0 / (count - 1) as f64;
                #[allow(clippy::cast_precision_loss)]
                (0..count).map(|k| k as f64 * step).collect()
            }
        };
        Self { positions }
    }

    /// Executes the extraction.
    ///
    /// Each position is mapped to the nearest lower centerline sample; the
    /// tangent is estimated from the segment to the next sample, or from the
    /// previous one at the apex. The geometry must have been sampled from
    /// the given model.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyGeometry`] when the geometry holds no
    /// samples, [`GeometryError::DegenerateTangent`] when it holds fewer
    /// than two, and [`GeometryError::FractionOutOfRange`] for positions
    /// outside `[0, 1]`.
    pub fn execute(&self, model: &CochleaModel, geometry: &Geometry) -> Result<Vec<CrossSection>> {
        if geometry.is_empty() {
            return Err(GeometryError::EmptyGeometry.into());
        }
        if self.positions.is_empty() {
            return Ok(Vec::new());
        }
        if geometry.len() < 2 {
            return Err(GeometryError::DegenerateTangent { length: 0.0 }.into());
        }

        let last = geometry.len() - 1;
        let mut sections = Vec::with_capacity(self.positions.len());
        for &position in &self.positions {
            if !(0.0..=1.0).contains(&position) {
                return Err(GeometryError::FractionOutOfRange(position).into());
            }

            #[allow(clippy::cast_precision_loss)]
            let scaled = position * last as f64;
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let index = scaled as usize;
            let (from, to) = if index < last {
                (index, index + 1)
            } else {
                (index - 1, index)
            };

            let direction = geometry.centerline[to] - geometry.centerline[from];
            let frame = SectionFrame::from_direction(&direction)?;
            let phi = geometry.phi[index];
            let center = geometry.centerline[index];
            sections.push(frame_ring(&center, &frame, model.scala_radius(phi), phi));
        }
        Ok(sections)
    }
}

/// Evenly spaced sample index for the `k`-th of `count` sections over `len`
/// samples, truncating toward the base.
fn spaced_index(k: usize, count: usize, len: usize) -> usize {
    if count <= 1 || len <= 1 {
        return 0;
    }
    k * (len - 1) / (count - 1)
}

fn radial_ring(center: &Point3, radius: f64, phi: f64) -> CrossSection {
    let (sin_phi, cos_phi) = phi.sin_cos();
    let mut points = Vec::with_capacity(RADIAL_RING_POINTS + 1);
    for k in 0..=RADIAL_RING_POINTS {
        #[allow(clippy::cast_precision_loss)]
        let theta = TAU * k as f64 / RADIAL_RING_POINTS as f64;
        let local_r = radius * (theta.cos() - 1.0);
        points.push(Point3::new(
            center.x + local_r * cos_phi,
            center.y + local_r * sin_phi,
            center.z + radius * theta.sin(),
        ));
    }
    CrossSection {
        center: *center,
        radius,
        phi,
        points,
    }
}

fn frame_ring(center: &Point3, frame: &SectionFrame, radius: f64, phi: f64) -> CrossSection {
    let mut points = Vec::with_capacity(FRAME_RING_POINTS + 1);
    for k in 0..=FRAME_RING_POINTS {
        #[allow(clippy::cast_precision_loss)]
        let theta = TAU * k as f64 / FRAME_RING_POINTS as f64;
        points.push(
            *center + frame.u_dir * (radius * theta.cos()) + frame.v_dir * (radius * theta.sin()),
        );
    }
    CrossSection {
        center: *center,
        radius,
        phi,
        points,
    }
}
