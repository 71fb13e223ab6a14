//! # Validation Module
//!
//! Opt-in validators for rental input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: rental-cli                                                   │
//! │  └── Parses "<kind>:<units>" and rejects bad counts up front           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Rental::try_new (THIS MODULE)                                │
//! │  └── Non-negative, bounded unit counts                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Rental::new / Invoice                                                 │
//! │  └── No validation: counts are taken as given                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::validation::validate_units;
//!
//! assert!(validate_units(10).is_ok());
//! assert!(validate_units(-1).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_RENTAL_UNITS;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a rental unit count.
///
/// ## Rules
/// - Must be zero or greater (a zero-unit rental bills nothing)
/// - Must not exceed MAX_RENTAL_UNITS
pub fn validate_units(units: i64) -> ValidationResult<()> {
    if units < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "units".to_string(),
        });
    }

    if units > MAX_RENTAL_UNITS {
        return Err(ValidationError::OutOfRange {
            field: "units".to_string(),
            min: 0,
            max: MAX_RENTAL_UNITS,
        });
    }

    Ok(())
}

/// Parses and validates a unit count given as text.
///
/// ## Returns
/// The parsed count.
pub fn parse_units(raw: &str) -> ValidationResult<i64> {
    let raw = raw.trim();

    if raw.is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: "units".to_string(),
            reason: "unit count is missing".to_string(),
        });
    }

    let units = raw
        .parse::<i64>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "units".to_string(),
            reason: format!("'{}' is not a whole number", raw),
        })?;

    validate_units(units)?;
    Ok(units)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_units() {
        assert!(validate_units(0).is_ok());
        assert!(validate_units(1).is_ok());
        assert!(validate_units(MAX_RENTAL_UNITS).is_ok());

        assert!(matches!(
            validate_units(-1),
            Err(ValidationError::MustBeNonNegative { .. })
        ));
        assert!(matches!(
            validate_units(MAX_RENTAL_UNITS + 1),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_parse_units() {
        assert_eq!(parse_units("10"), Ok(10));
        assert_eq!(parse_units(" 3 "), Ok(3));

        assert!(parse_units("").is_err());
        assert!(parse_units("ten").is_err());
        assert!(parse_units("1.5").is_err());
        assert!(parse_units("-2").is_err());
    }
}
