pub mod frame;
pub mod polynomial;
pub mod quadrature;

pub use frame::SectionFrame;
pub use polynomial::Polynomial;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4D vector type.
pub type Vector4 = nalgebra::Vector4<f64>;

/// 4x4 matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
