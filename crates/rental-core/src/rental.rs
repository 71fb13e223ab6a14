//! # Rental Types
//!
//! The closed set of rental pricing tiers.
//!
//! ## Type Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Rental Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐          ┌─────────────────┐                      │
//! │  │   RentalKind    │          │     Rental      │                      │
//! │  │  ─────────────  │          │  ─────────────  │                      │
//! │  │  Hourly   $5    │◄─────────│  kind           │                      │
//! │  │  Daily    $20   │          │  units (i64)    │                      │
//! │  │  Weekly   $60   │          │                 │                      │
//! │  └─────────────────┘          └─────────────────┘                      │
//! │                                                                         │
//! │  total_price = kind.unit_price() × units   (one shared function)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::billable::Billable;
use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::validation::{parse_units, validate_units};

// =============================================================================
// Rental Kind
// =============================================================================

/// The billing period of a rental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalKind {
    /// Charged per hour.
    Hourly,
    /// Charged per day.
    Daily,
    /// Charged per week.
    Weekly,
}

impl RentalKind {
    /// Every kind, in billing-period order.
    pub const ALL: [RentalKind; 3] = [RentalKind::Hourly, RentalKind::Daily, RentalKind::Weekly];

    /// Whole-currency price of one billing period.
    pub const fn unit_price_major(&self) -> i64 {
        match self {
            RentalKind::Hourly => 5,
            RentalKind::Daily => 20,
            RentalKind::Weekly => 60,
        }
    }

    /// Price of one billing period.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_major(self.unit_price_major())
    }
}

impl fmt::Display for RentalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RentalKind::Hourly => write!(f, "hourly"),
            RentalKind::Daily => write!(f, "daily"),
            RentalKind::Weekly => write!(f, "weekly"),
        }
    }
}

impl FromStr for RentalKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "h" | "hour" | "hourly" => Ok(RentalKind::Hourly),
            "d" | "day" | "daily" => Ok(RentalKind::Daily),
            "w" | "week" | "weekly" => Ok(RentalKind::Weekly),
            _ => Err(ValidationError::NotAllowed {
                field: "rental kind".to_string(),
                allowed: vec!["hour".into(), "day".into(), "week".into()],
            }),
        }
    }
}

// =============================================================================
// Rental
// =============================================================================

/// A rental line: a billing period and how many of them to bill.
///
/// ## Unit Counts
/// [`Rental::new`] and the `by_*` constructors take the count as given,
/// negative values included. Use [`Rental::try_new`] to reject out-of-range
/// counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rental {
    kind: RentalKind,
    units: i64,
}

impl Rental {
    /// Creates a rental without validating `units`.
    #[inline]
    pub const fn new(kind: RentalKind, units: i64) -> Self {
        Rental { kind, units }
    }

    /// Creates a rental, rejecting negative or oversized unit counts.
    ///
    /// ```rust
    /// use rental_core::{Rental, RentalKind};
    ///
    /// assert!(Rental::try_new(RentalKind::Daily, 3).is_ok());
    /// assert!(Rental::try_new(RentalKind::Daily, -3).is_err());
    /// ```
    pub fn try_new(kind: RentalKind, units: i64) -> CoreResult<Self> {
        validate_units(units)?;
        Ok(Rental::new(kind, units))
    }

    /// A rental charged by the hour at $5 each.
    #[inline]
    pub const fn by_hour(units: i64) -> Self {
        Rental::new(RentalKind::Hourly, units)
    }

    /// A rental charged by the day at $20 each.
    #[inline]
    pub const fn by_day(units: i64) -> Self {
        Rental::new(RentalKind::Daily, units)
    }

    /// A rental charged by the week at $60 each.
    #[inline]
    pub const fn by_week(units: i64) -> Self {
        Rental::new(RentalKind::Weekly, units)
    }

    /// The billing period.
    #[inline]
    pub const fn kind(&self) -> RentalKind {
        self.kind
    }
}

impl Billable for Rental {
    fn unit_price(&self) -> Money {
        self.kind.unit_price()
    }

    fn units(&self) -> i64 {
        self.units
    }

    fn set_units(&mut self, units: i64) {
        self.units = units;
    }
}

impl fmt::Display for Rental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.kind, self.units)
    }
}

/// Parses the `<kind>:<units>` form, e.g. `hour:10` or `week:2`.
///
/// Unit counts are validated.
impl FromStr for Rental {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, units) = s.split_once(':').ok_or_else(|| ValidationError::InvalidFormat {
            field: "rental".to_string(),
            reason: format!("expected <kind>:<units>, got '{}'", s),
        })?;

        Ok(Rental::new(kind.parse()?, parse_units(units)?))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_rental_by_hour_total_price() {
        let rental = Rental::by_hour(10);
        assert_eq!(rental.units(), 10);
        assert_eq!(rental.unit_price(), Money::from_major(5));
        assert_eq!(rental.total_price(), Money::from_major(50));
    }

    #[test]
    fn test_rental_by_day_total_price() {
        let rental = Rental::by_day(10);
        assert_eq!(rental.units(), 10);
        assert_eq!(rental.unit_price(), Money::from_major(20));
        assert_eq!(rental.total_price(), Money::from_major(200));
    }

    #[test]
    fn test_rental_by_week_total_price() {
        let rental = Rental::by_week(10);
        assert_eq!(rental.units(), 10);
        assert_eq!(rental.unit_price(), Money::from_major(60));
        assert_eq!(rental.total_price(), Money::from_major(600));
    }

    #[test]
    fn test_set_units_keeps_price() {
        let mut rental = Rental::by_week(1);
        rental.set_units(4);
        assert_eq!(rental.unit_price(), Money::from_major(60));
        assert_eq!(rental.total_price(), Money::from_major(240));
    }

    #[test]
    fn test_unchecked_constructor_keeps_negative_units() {
        let rental = Rental::by_hour(-2);
        assert_eq!(rental.units(), -2);
        assert_eq!(rental.total_price(), Money::from_major(-10));
    }

    #[test]
    fn test_try_new_rejects_negative_units() {
        let err = Rental::try_new(RentalKind::Hourly, -1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("hour".parse::<RentalKind>().unwrap(), RentalKind::Hourly);
        assert_eq!("Daily".parse::<RentalKind>().unwrap(), RentalKind::Daily);
        assert_eq!("w".parse::<RentalKind>().unwrap(), RentalKind::Weekly);
        assert!("month".parse::<RentalKind>().is_err());
    }

    #[test]
    fn test_rental_parsing() {
        assert_eq!("hour:10".parse::<Rental>().unwrap(), Rental::by_hour(10));
        assert_eq!("week:1".parse::<Rental>().unwrap(), Rental::by_week(1));

        assert!("hour".parse::<Rental>().is_err());
        assert!("hour:".parse::<Rental>().is_err());
        assert!("year:1".parse::<Rental>().is_err());
        assert!("day:-1".parse::<Rental>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Rental::by_day(3).to_string(), "daily x3");
        assert_eq!(RentalKind::Weekly.to_string(), "weekly");
    }
}
