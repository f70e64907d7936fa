//! Error types and handling
//!
//! This module contains the errors raised by classification and sorting.
//! Both kinds fail fast: the caller repairs the input and calls again.

use thiserror::Error;

/// Errors that can occur during classification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    /// A record lacks a field classification depends on
    #[error("Invalid record {id}: missing required field {field}")]
    InvalidRecord {
        /// Id of the offending record
        id: String,
        /// Name of the missing field
        field: &'static str,
    },

    /// An unsupported sort key was requested
    #[error("Invalid sort key: {0} (supported: startTime, participantCount)")]
    InvalidSortKey(String),
}

impl ClassifierError {
    /// Create an invalid record error
    pub fn invalid_record(id: impl Into<String>, field: &'static str) -> Self {
        Self::InvalidRecord { id: id.into(), field }
    }

    /// Create an invalid sort key error
    pub fn invalid_sort_key(key: impl Into<String>) -> Self {
        Self::InvalidSortKey(key.into())
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            ClassifierError::InvalidRecord { .. } => "Invalid Record",
            ClassifierError::InvalidSortKey(_) => "Invalid Sort Key",
        }
    }
}

/// Result type for classifier operations
pub type ClassifierResult<T> = Result<T, ClassifierError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ClassifierError::invalid_record("evt-9", "startTime");
        assert!(matches!(
            err,
            ClassifierError::InvalidRecord { ref id, field: "startTime" } if id == "evt-9"
        ));
        assert_eq!(err.to_string(), "Invalid record evt-9: missing required field startTime");

        let err = ClassifierError::invalid_sort_key("rating");
        assert_eq!(
            err.to_string(),
            "Invalid sort key: rating (supported: startTime, participantCount)"
        );
    }

    #[test]
    fn test_error_category() {
        assert_eq!(
            ClassifierError::invalid_record("x", "lifecycleStatus").category(),
            "Invalid Record"
        );
        assert_eq!(ClassifierError::invalid_sort_key("x").category(), "Invalid Sort Key");
    }
}
