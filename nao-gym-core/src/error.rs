//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NaoGymError {
    /// A vector does not have the length the receiver expects.
    #[error("Dimension mismatch of {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// What was being checked, e.g. `"action"`.
        what: String,

        /// Expected length.
        expected: usize,

        /// Actual length.
        got: usize,
    },

    /// An action contains a NaN or infinite element.
    #[error("Non-finite action element at index {0}")]
    NonFiniteAction(usize),

    /// The environment was stepped before its first reset.
    #[error("Environment is stepped before reset")]
    EnvNotReset,

    /// A body name the simulator does not know.
    #[error("Unknown body: {0}")]
    UnknownBody(String),

    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),
}

impl NaoGymError {
    /// Shorthand for [`NaoGymError::DimensionMismatch`].
    pub fn dimension_mismatch(what: impl Into<String>, expected: usize, got: usize) -> Self {
        Self::DimensionMismatch {
            what: what.into(),
            expected,
            got,
        }
    }
}
