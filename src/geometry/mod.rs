pub mod curve;
pub mod model;
pub mod surface;

pub use curve::{Curve, CurveDomain, SpiralCurve};
pub use model::CochleaModel;
pub use surface::{ScalaSurface, Surface, SurfaceDomain};
