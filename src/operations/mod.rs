mod arc_length;
mod point_at;

pub use arc_length::ArcLength;
pub use point_at::{PointAt, PointSample};
