//! Availability-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Errors surfaced by availability operations.
///
/// Batch parsing problems are handled locally and never appear here; only
/// conditions that block the requested operation do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvailabilityError {
    /// A required time or day input was unreadable.
    InvalidInput { field: String, message: String },
    /// The range named for deletion is not stored.
    RangeNotFound,
    /// The backing store failed; retry policy belongs to the transport.
    Store(String),
}

impl AvailabilityError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        AvailabilityError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        AvailabilityError::Store(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AvailabilityError::InvalidInput { .. } => ErrorCode::ValidationFailed,
            AvailabilityError::RangeNotFound => ErrorCode::RangeNotFound,
            AvailabilityError::Store(_) => ErrorCode::StoreUnavailable,
        }
    }

    pub fn message(&self) -> String {
        match self {
            AvailabilityError::InvalidInput { field, message } => {
                format!("Invalid {}: {}", field, message)
            }
            AvailabilityError::RangeNotFound => "No matching availability range found".to_string(),
            AvailabilityError::Store(msg) => format!("Availability store error: {}", msg),
        }
    }
}

impl std::fmt::Display for AvailabilityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AvailabilityError {}

impl From<DomainError> for AvailabilityError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::RangeNotFound => AvailabilityError::RangeNotFound,
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidFormat
            | ErrorCode::InvertedRange
            | ErrorCode::OutOfRange => AvailabilityError::invalid_input("input", err.to_string()),
            _ => AvailabilityError::Store(err.to_string()),
        }
    }
}

impl From<ValidationError> for AvailabilityError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field.clone(),
            ValidationError::InvertedRange { .. } => "range".to_string(),
        };
        AvailabilityError::InvalidInput {
            field,
            message: err.to_string(),
        }
    }
}
