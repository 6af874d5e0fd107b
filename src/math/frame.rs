use crate::error::{GeometryError, Result};
use crate::math::{Vector3, TOLERANCE};

/// Tangents with a Z component at or above this magnitude are close enough to
/// vertical that crossing with world-Z would be ill-conditioned; world-X is
/// used as the reference axis instead.
const VERTICAL_LIMIT: f64 = 0.9;

/// An orthonormal frame spanning the plane of a cross-section.
///
/// `u_dir` and `v_dir` are unit vectors perpendicular to the unit `tangent`,
/// chosen so that `v_dir = tangent x u_dir` (right-handed). Ring points around
/// a center `c` are `c + r*cos(theta)*u_dir + r*sin(theta)*v_dir`.
#[derive(Debug, Clone, Copy)]
pub struct SectionFrame {
    /// Unit tangent the frame is anchored to.
    pub tangent: Vector3,
    /// First in-plane axis (theta = 0 direction).
    pub u_dir: Vector3,
    /// Second in-plane axis (theta = pi/2 direction).
    pub v_dir: Vector3,
}

impl SectionFrame {
    /// Builds a stable orthonormal frame from a (not necessarily unit)
    /// direction vector.
    ///
    /// The reference axis for the first perpendicular is world-Z, switched to
    /// world-X when the normalized direction is nearly vertical, which keeps
    /// the cross products well away from zero for every input direction.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateTangent`] if `direction` has
    /// near-zero length.
    pub fn from_direction(direction: &Vector3) -> Result<Self> {
        let length = direction.norm();
        if length < TOLERANCE {
            return Err(GeometryError::DegenerateTangent { length }.into());
        }
        let tangent = direction / length;

        let reference = if tangent.z.abs() < VERTICAL_LIMIT {
            Vector3::z()
        } else {
            Vector3::x()
        };

        // For a unit tangent both cross products are bounded away from zero:
        // the reference axis is never within ~26 degrees of the tangent.
        let u_dir = reference.cross(&tangent);
        let u_dir = u_dir / u_dir.norm();
        let v_dir = tangent.cross(&u_dir);
        let v_dir = v_dir / v_dir.norm();

        Ok(Self {
            tangent,
            u_dir,
            v_dir,
        })
    }
}
