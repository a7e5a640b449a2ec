//! Construction errors shared by all shapes.

use std::fmt;

/// Error returned by shape constructors. Area and predicates never fail.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// An input violates the shape's invariants (non-positive, non-finite,
    /// or not realizable as the requested shape).
    InvalidArgument { reason: String },
}

impl ShapeError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Human-readable reason, without the error-kind prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::InvalidArgument { reason } => reason,
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for ShapeError {}
