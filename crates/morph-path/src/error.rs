//! Error types for morph-path

use std::fmt;

/// Result type for morph-path operations
pub type Result<T> = std::result::Result<T, PathError>;

/// How a segment's shape disagreed with the container under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMismatch {
    /// `[...]` segment applied to a mapping
    BracketInMapping,
    /// Bare field name applied to a sequence
    BareInSequence,
}

impl fmt::Display for ShapeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BracketInMapping => f.write_str("bracket-style key used in mapping context"),
            Self::BareInSequence => {
                f.write_str("bare key used in sequence context; expected bracket form")
            }
        }
    }
}

/// Errors raised while tokenizing or resolving a path.
///
/// Tokenizing only fails with [`PathError::InvalidPath`]. Every traversal
/// error carries `at`, the part of the path consumed before the failing
/// segment, rendered from the root (`$`, `$.a.b`, `$.rows[0]`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    #[error("Invalid path: {reason}")]
    InvalidPath { reason: String },

    #[error("Invalid bracket expression '{expression}' at {at}: {reason}")]
    InvalidBracketExpression {
        expression: String,
        reason: &'static str,
        at: String,
    },

    #[error("Segment '{segment}' at {at}: {mismatch}")]
    PathShape {
        segment: String,
        at: String,
        mismatch: ShapeMismatch,
    },

    #[error("Key '{key}' not found at {at}")]
    PathNotFound { key: String, at: String },

    #[error("Index {index} out of range at {at} (length {len})")]
    IndexOutOfRange { index: String, len: usize, at: String },

    #[error("No element matches predicate [{predicate}] at {at}")]
    PredicateNoMatch { predicate: String, at: String },

    #[error("Cannot descend into {found} at {at} with segment '{segment}'")]
    PathTraversal {
        segment: String,
        at: String,
        found: &'static str,
    },
}

/// Discriminant of [`PathError`] for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathErrorKind {
    InvalidPath,
    InvalidBracketExpression,
    PathShape,
    PathNotFound,
    IndexOutOfRange,
    PredicateNoMatch,
    PathTraversal,
}

impl PathError {
    pub fn invalid_path(reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> PathErrorKind {
        match self {
            Self::InvalidPath { .. } => PathErrorKind::InvalidPath,
            Self::InvalidBracketExpression { .. } => PathErrorKind::InvalidBracketExpression,
            Self::PathShape { .. } => PathErrorKind::PathShape,
            Self::PathNotFound { .. } => PathErrorKind::PathNotFound,
            Self::IndexOutOfRange { .. } => PathErrorKind::IndexOutOfRange,
            Self::PredicateNoMatch { .. } => PathErrorKind::PredicateNoMatch,
            Self::PathTraversal { .. } => PathErrorKind::PathTraversal,
        }
    }
}
