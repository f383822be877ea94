use thiserror::Error;

/// All errors returned by `fixvec-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorError {
    /// An element index is out of bounds for the vector's length.
    #[error("index {index} out of bounds for vector of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A slice window does not fit inside the source vector.
    #[error("slice [{start}, {start}+{len}) out of range for vector of length {size}")]
    SliceOutOfRange {
        start: usize,
        len: usize,
        size: usize,
    },

    /// The requested output length does not match the combined input lengths.
    #[error("length mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Integer division by a zero scalar or element.
    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience alias used throughout `fixvec-core`.
pub type Result<T> = core::result::Result<T, VectorError>;
