//! Error type shared by every constructor and area query.

use thiserror::Error;

/// Failure raised when an input violates a figure's invariants.
///
/// There is a single kind; the payload is the human-readable reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeomError {
    #[error("{0}")]
    InvalidArgument(String),
}

impl GeomError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        GeomError::InvalidArgument(reason.into())
    }

    /// The reason string, without the variant wrapper.
    pub fn reason(&self) -> &str {
        match self {
            GeomError::InvalidArgument(reason) => reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, GeomError>;

/// Unwrap an optional argument or fail with `reason`.
#[inline]
pub(crate) fn require<T>(value: Option<T>, reason: &str) -> Result<T> {
    value.ok_or_else(|| GeomError::invalid(reason))
}
