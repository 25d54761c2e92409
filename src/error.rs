//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Errors raised by a contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying database failure (connection, query, etc.)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A record with this name already exists
    #[error("Duplicate contact name: {0}")]
    DuplicateName(String),

    /// A stored row could not be turned back into a contact
    #[error("Corrupt record: {0}")]
    Corrupt(String),

    /// Store is not reachable
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by the contact service.
#[derive(Error, Debug)]
pub enum ContactError {
    /// Requested contact does not exist
    #[error("Contact not found: {0}")]
    NotFound(String),

    /// Store failure, not recovered locally
    #[error(transparent)]
    Storage(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Form field a validation message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Phone,
    Email,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field-level validation failure, shown on the originating form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::NotFound("Alice".to_string());
        assert_eq!(err.to_string(), "Contact not found: Alice");

        let err = ConfigError::InvalidValue {
            var: "PORT".to_string(),
            reason: "Must be a number between 0-65535, got: x".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for PORT: Must be a number between 0-65535, got: x"
        );

        let err = StoreError::DuplicateName("Alice".to_string());
        assert_eq!(err.to_string(), "Duplicate contact name: Alice");
    }

    #[test]
    fn test_storage_error_is_transparent() {
        let err: ContactError = StoreError::Unavailable("closed".to_string()).into();
        assert_eq!(err.to_string(), "Store unavailable: closed");
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new(Field::Email, "Invalid email!");
        assert_eq!(err.to_string(), "email: Invalid email!");
        assert_eq!(
            serde_json::to_string(&err).unwrap(),
            r#"{"field":"email","message":"Invalid email!"}"#
        );
    }
}
