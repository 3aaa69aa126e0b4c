//! Booking-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError, GROUP_CAPACITY};

/// Errors surfaced by booking queries and checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// A required query parameter was missing or unreadable.
    InvalidQuery { field: String, message: String },
    /// A group slot is at capacity.
    CapacityExceeded { booked: u32 },
    /// The backing store failed.
    Store(String),
}

impl BookingError {
    pub fn invalid_query(field: impl Into<String>, message: impl Into<String>) -> Self {
        BookingError::InvalidQuery {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn capacity_exceeded(booked: u32) -> Self {
        BookingError::CapacityExceeded { booked }
    }

    pub fn store(message: impl Into<String>) -> Self {
        BookingError::Store(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            BookingError::InvalidQuery { .. } => ErrorCode::ValidationFailed,
            BookingError::CapacityExceeded { .. } => ErrorCode::CapacityExceeded,
            BookingError::Store(_) => ErrorCode::StoreUnavailable,
        }
    }

    pub fn message(&self) -> String {
        match self {
            BookingError::InvalidQuery { field, message } => {
                format!("Invalid {}: {}", field, message)
            }
            BookingError::CapacityExceeded { booked } => format!(
                "This group consultation slot is full ({}/{} booked)",
                booked, GROUP_CAPACITY
            ),
            BookingError::Store(msg) => format!("Booking store error: {}", msg),
        }
    }
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for BookingError {}

impl From<DomainError> for BookingError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::InvalidFormat
            | ErrorCode::InvertedRange
            | ErrorCode::OutOfRange => BookingError::invalid_query("input", err.to_string()),
            ErrorCode::CapacityExceeded => BookingError::CapacityExceeded { booked: GROUP_CAPACITY },
            _ => BookingError::Store(err.to_string()),
        }
    }
}

impl From<ValidationError> for BookingError {
    fn from(err: ValidationError) -> Self {
        let field = match &err {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field.clone(),
            ValidationError::InvertedRange { .. } => "range".to_string(),
        };
        BookingError::InvalidQuery {
            field,
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_message_names_the_cap() {
        let err = BookingError::capacity_exceeded(5);
        assert_eq!(err.code(), ErrorCode::CapacityExceeded);
        assert!(err.message().contains("5/5"));
    }

    #[test]
    fn store_errors_keep_their_category() {
        let err: BookingError = DomainError::store("timeout").into();
        assert_eq!(err.code(), ErrorCode::StoreUnavailable);
    }
}
