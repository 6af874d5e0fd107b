pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod parameters;
pub mod sampling;

pub use error::{CochlisError, Result};
