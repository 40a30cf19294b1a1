use thiserror::Error;

/// Top-level error type for the Bezkern curve kernel.
#[derive(Debug, Error)]
pub enum BezkernError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric construction and evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid control point count {count}: a segment takes 0, 1 or 2 control points")]
    InvalidControlCount { count: usize },

    #[error("invalid point count {count}: a segment takes 2, 3 or 4 points")]
    InvalidPointCount { count: usize },

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to operations on segments.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`BezkernError`].
pub type Result<T> = std::result::Result<T, BezkernError>;
