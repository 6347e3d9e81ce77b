use thiserror::Error;

/// Top-level error type for the checked operations of this crate.
///
/// The unchecked operations (`normalize`, `inverse`, `write`) never return
/// errors; degenerate input propagates as IEEE NaN/Inf there.
#[derive(Debug, Error)]
pub enum LinalgError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors related to numeric degeneracy.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("zero-length vector")]
    ZeroVector,

    #[error("singular matrix (determinant = {determinant})")]
    SingularMatrix { determinant: f64 },
}

/// Errors related to flat-buffer views of vectors and matrices.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("buffer too small: need {required} elements, got {available}")]
    BufferTooSmall { required: usize, available: usize },

    #[error("component index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for results using [`LinalgError`].
pub type Result<T> = std::result::Result<T, LinalgError>;
