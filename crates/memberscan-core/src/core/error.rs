//! Error types for membership scans.
//!
//! The membership operations themselves are infallible. These errors cover
//! the surrounding concerns: building typed sequences from literals and
//! writing reports.

use thiserror::Error;

/// Errors that can occur around membership checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MembershipError {
    /// A literal cannot be represented by the element type.
    #[error("Literal {value} cannot be represented as {target_type}")]
    Conversion {
        /// The literal that failed to convert
        value: String,
        /// Name of the element type
        target_type: &'static str,
    },

    /// The report sink rejected a write.
    #[error("Failed to write report: {reason}")]
    Output {
        /// Description of the I/O failure
        reason: String,
    },
}

impl MembershipError {
    /// Create a Conversion error for a literal and its intended element type.
    pub fn conversion<V: std::fmt::Display>(value: V, target_type: &'static str) -> Self {
        Self::Conversion {
            value: value.to_string(),
            target_type,
        }
    }

    /// Create an Output error with a custom reason.
    pub fn output<S: Into<String>>(reason: S) -> Self {
        Self::Output {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for MembershipError {
    fn from(err: std::io::Error) -> Self {
        Self::output(err.to_string())
    }
}

/// Result type alias for operations that can produce MembershipError.
pub type Result<T> = std::result::Result<T, MembershipError>;
