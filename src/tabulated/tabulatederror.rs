use thiserror::Error;

/// Failures raised by tabulated-function construction and mutation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TabulatedFunctionError {
    /// Bad constructor or tabulation parameters.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("point index {index} out of range for {count} points")]
    IndexOutOfRange {
        index: usize,
        count: usize
    },

    /// A mutation would break the strict X ordering.
    #[error("invalid point order: {0}")]
    InvalidPointOrder(String),

    #[error("a point with x = {0} already exists")]
    DuplicateX(f64),

    /// Deleting from a function with fewer than three points.
    #[error("cannot delete a point from a function with {count} points")]
    MinimumPointsViolation {
        count: usize
    }
}
