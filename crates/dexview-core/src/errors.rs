//! Error types for dexview-core.
//!
//! Core never performs I/O, so every error here describes bad input or a
//! broken structural invariant. Callers match on the variant (or on
//! [`CoreError::code`]) to tell them apart.

use thiserror::Error;

/// Result alias used throughout dexview-core.
pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Caller-supplied value is unusable (unknown region key, empty base url, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal structural rule was violated (evolution tree too deep, ...).
    #[error("invariant violated: {0}")]
    Invariant(String),

    /// An upstream payload does not have the expected shape.
    #[error("malformed {resource}: {reason}")]
    Malformed { resource: &'static str, reason: String },
}

impl CoreError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::Invariant(msg.into())
    }

    pub fn malformed(resource: &'static str, reason: impl Into<String>) -> Self {
        Self::Malformed {
            resource,
            reason: reason.into(),
        }
    }

    /// Stable short code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Invariant(_) => "invariant",
            Self::Malformed { .. } => "malformed",
        }
    }
}
