//! Error types for the braze builder protocol.

use alloc::string::String;
use core::fmt;

/// Result type alias for braze operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for builder and iteration operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A builder was used after it was finished, or split/join arguments
    /// violated the partitioning contract.
    InvalidBuilderState {
        message: String,
    },
    /// A user-supplied function failed during an operation.
    UserFunction {
        message: String,
    },
    /// Zipped iteration was attempted over inputs of different lengths.
    LengthMismatch {
        left: usize,
        right: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBuilderState { message } => {
                write!(f, "Invalid builder state: {}", message)
            }
            Error::UserFunction { message } => {
                write!(f, "User function failed: {}", message)
            }
            Error::LengthMismatch { left, right } => {
                write!(f, "Input length mismatch: {} vs {}", left, right)
            }
        }
    }
}

impl Error {
    /// Creates an invalid builder state error.
    pub fn invalid_builder_state(message: impl Into<String>) -> Self {
        Error::InvalidBuilderState {
            message: message.into(),
        }
    }

    /// Creates a user function error.
    pub fn user_function(message: impl Into<String>) -> Self {
        Error::UserFunction {
            message: message.into(),
        }
    }

    /// Creates a length mismatch error.
    pub fn length_mismatch(left: usize, right: usize) -> Self {
        Error::LengthMismatch { left, right }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_builder_state("merge on a finished appender");
        assert!(err.to_string().contains("finished appender"));

        let err = Error::user_function("predicate failed");
        assert!(err.to_string().contains("predicate failed"));

        let err = Error::length_mismatch(4, 2);
        assert!(err.to_string().contains("4 vs 2"));
    }

    #[test]
    fn test_error_constructors() {
        let err = Error::length_mismatch(3, 5);
        match err {
            Error::LengthMismatch { left, right } => {
                assert_eq!(left, 3);
                assert_eq!(right, 5);
            }
            _ => panic!("Wrong error type"),
        }
    }
}
