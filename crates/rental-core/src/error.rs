//! # Error Types
//!
//! Domain-specific error types for rental-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rental-core errors (this file)                                        │
//! │  ├── CoreError        - Invoice operation failures                     │
//! │  └── ValidationError  - Unit count validation failures                 │
//! │                                                                         │
//! │  rental-cli errors (separate crate)                                    │
//! │  └── CliError         - Config, rendering and argument failures        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Errors are returned to the caller as-is. Nothing in this crate logs them.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A required argument was missing.
    ///
    /// ## When This Occurs
    /// - Adding an undefined (`None`) item to an invoice
    #[error("Invalid argument: {name} must not be empty")]
    InvalidArgument { name: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Shorthand for an [`CoreError::InvalidArgument`] naming `name`.
    pub fn invalid_argument(name: impl Into<String>) -> Self {
        CoreError::InvalidArgument { name: name.into() }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised only by the checked constructors and the validators in
/// [`crate::validation`]. The unchecked constructors never produce these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., a rental argument without a unit count).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = CoreError::invalid_argument("item");
        assert_eq!(err.to_string(), "Invalid argument: item must not be empty");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "units".to_string(),
        };
        assert_eq!(err.to_string(), "units must not be negative");

        let err = ValidationError::OutOfRange {
            field: "units".to_string(),
            min: 0,
            max: 10_000,
        };
        assert_eq!(err.to_string(), "units must be between 0 and 10000");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBeNonNegative {
            field: "units".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
