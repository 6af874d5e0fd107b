use thiserror::Error;

/// Top-level error type for the Cochlis geometry kernel.
#[derive(Debug, Error)]
pub enum CochlisError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Integration(#[from] IntegrationError),
}

/// Errors related to shape parameters and their persistence.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("expected exactly 4 shape parameters, got {got}")]
    Arity { got: usize },

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfBounds {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("unknown generation mode {0:?}, expected \"mean\" or \"random\"")]
    InvalidMode(String),

    #[error("failed to read or write parameter file")]
    Io(#[from] std::io::Error),

    #[error("unparseable value {text:?} in parameter file")]
    Parse { text: String },
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate spiral: turn estimate {turns} must be positive")]
    DegenerateSpiral { turns: f64 },

    #[error("angular resolution {0} must be positive and finite")]
    InvalidResolution(f64),

    #[error("degenerate tangent: direction length {length:.3e} is below tolerance")]
    DegenerateTangent { length: f64 },

    #[error("degenerate surface normal")]
    DegenerateNormal,

    #[error("curve fraction {0} is outside [0, 1]")]
    FractionOutOfRange(f64),

    #[error("geometry contains no centerline samples")]
    EmptyGeometry,
}

/// Errors related to numerical integration.
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("integrand is not finite at {at}")]
    NonFinite { at: f64 },
}

/// Convenience type alias for results using [`CochlisError`].
pub type Result<T> = std::result::Result<T, CochlisError>;
