//! Error type shared by the GA components.

/// Failures reported by tour evaluation, selection and population setup.
///
/// These signal misconfiguration (bad input points, bad parameters) rather
/// than stochastic outcomes. A mutation drawing its own position or a parent
/// being selected twice are normal and never produce an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GaError {
    #[error("InvalidReferenceSet: at least 2 points are required, got {len}")]
    InvalidReferenceSet { len: usize },

    #[error("NonFiniteCoordinate: point at index {index} has a NaN or infinite coordinate")]
    NonFiniteCoordinate { index: usize },

    #[error("DegenerateFitness: closed tour length is {length}, fitness is undefined")]
    DegenerateFitness { length: f64 },

    #[error("SelectionUnderflow: fitness sum is {total}, cannot weight selection")]
    SelectionUnderflow { total: f64 },

    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),

    #[error("LengthMismatch: expected {expected} points, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("InvalidSegment: segment [{start}, {end}) does not fit a tour of {len} points")]
    InvalidSegment { start: usize, end: usize, len: usize },

    #[error("ParentMismatch: parents are not permutations of the same point set")]
    ParentMismatch,
}

impl GaError {
    pub(crate) fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
