use thiserror::Error;

/// Top-level error type for the evolute crate.
#[derive(Debug, Error)]
pub enum EvoluteError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Coordinate axis named in anchor errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("rescale span along {axis} is zero")]
    DegenerateAnchor { axis: Axis },

    #[error("points do not determine a unique circle")]
    CollinearInput,

    #[error("zero-length chord")]
    DegenerateChord,

    #[error("curve segment must contain at least one point")]
    EmptySegment,

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to operation inputs.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("index range [{start}, {end}] is invalid for a path of {len} points")]
    IndexRange {
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("{parameter} = {value} is below the minimum of {min}")]
    InsufficientSamples {
        parameter: &'static str,
        value: usize,
        min: usize,
    },
}

/// Errors raised while reading point records.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: expected two numbers, found {content:?}")]
    MalformedLine { line: usize, content: String },

    #[error("expected a non-negative index, found {value:?}")]
    InvalidIndex { value: String },
}

/// Convenience type alias for results using [`EvoluteError`].
pub type Result<T> = std::result::Result<T, EvoluteError>;

/// Fails with [`OperationError::InsufficientSamples`] when `value < min`.
pub(crate) fn require_samples(parameter: &'static str, value: usize, min: usize) -> Result<()> {
    if value < min {
        return Err(OperationError::InsufficientSamples {
            parameter,
            value,
            min,
        }
        .into());
    }
    Ok(())
}
