use thiserror::Error;

/// Top-level error type for the planar geometry core.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("{context} requires at least {required} points, got {actual}")]
    InsufficientPoints {
        context: &'static str,
        required: usize,
        actual: usize,
    },
}

/// Errors raised by explicit locus conversions.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("cannot convert locus variant {found} into {expected}")]
    WrongVariant {
        expected: &'static str,
        found: &'static str,
    },

    #[error("point sequence is empty")]
    EmptyPointSet,
}

/// Errors raised while parsing path definitions and coordinate strings.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unknown path command '{0}'")]
    UnknownCommand(char),

    #[error("malformed number: {0}")]
    MalformedNumber(String),

    #[error("path definition must begin with a move-to command")]
    MissingMoveTo,

    #[error("coordinate string has an odd number of values ({0})")]
    OddCoordinateCount(usize),

    #[error("malformed path definition: {0}")]
    Malformed(String),
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
