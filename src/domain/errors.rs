//! Domain validation errors.

use std::fmt;

/// Errors raised while parsing domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided phone region code is not supported.
    UnknownRegion(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::UnknownRegion(code) => write!(f, "Unsupported phone region: {}", code),
        }
    }
}

impl std::error::Error for ValidationError {}
