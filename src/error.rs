//! Error types for sequencing operations.
//!
//! Every error is a deterministic precondition violation detected at the
//! start of the offending operation. No partial results are returned.

use thiserror::Error;

/// Errors raised by the cost model and the sequencers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequencingError {
    /// A job set or schedule is malformed (negative time, length mismatch,
    /// element not present in the job multiset, ...).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The job set has no jobs.
    #[error("empty job set")]
    EmptyInput,

    /// A solver parameter is out of range.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Payload-free classification of [`SequencingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`SequencingError::InvalidInput`].
    InvalidInput,
    /// See [`SequencingError::EmptyInput`].
    EmptyInput,
    /// See [`SequencingError::InvalidParameter`].
    InvalidParameter,
}

impl SequencingError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Error category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::InvalidParameter { .. } => ErrorKind::InvalidParameter,
        }
    }
}

/// Result alias for sequencing operations.
pub type SequencingResult<T> = Result<T, SequencingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(
            SequencingError::invalid_input("x").kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(SequencingError::EmptyInput.kind(), ErrorKind::EmptyInput);
        assert_eq!(
            SequencingError::invalid_parameter("cooling_rate", "must be < 1").kind(),
            ErrorKind::InvalidParameter
        );
    }

    #[test]
    fn test_display() {
        let err = SequencingError::invalid_parameter("cooling_rate", "must be in (0, 1), got 1.5");
        assert_eq!(
            err.to_string(),
            "invalid parameter `cooling_rate`: must be in (0, 1), got 1.5"
        );
        assert_eq!(SequencingError::EmptyInput.to_string(), "empty job set");
    }
}
