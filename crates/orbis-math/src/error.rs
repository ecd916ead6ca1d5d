//! Error types shared by every orbis crate.

use thiserror::Error;

/// Errors that can occur while building or querying geometry.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An operand (or `self`) is undefined.
    #[error("{0} is undefined")]
    UndefinedOperand(&'static str),

    /// An argument is out of the accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A narrowing query asked for the wrong object variant.
    #[error("wrong object type: expected {expected}, found {found}")]
    WrongType {
        /// Requested variant name.
        expected: &'static str,
        /// Actual variant name (or a description of the contents).
        found: &'static str,
    },

    /// A numeric algorithm produced a result outside its contract.
    #[error("algorithmic failure: {0}")]
    AlgorithmicFailure(String),
}

impl GeometryError {
    /// Create an undefined-operand error.
    pub fn undefined(operand: &'static str) -> Self {
        Self::UndefinedOperand(operand)
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a wrong-type error.
    pub fn wrong_type(expected: &'static str, found: &'static str) -> Self {
        Self::WrongType { expected, found }
    }

    /// Create an algorithmic-failure error.
    pub fn algorithmic(message: impl Into<String>) -> Self {
        Self::AlgorithmicFailure(message.into())
    }
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
