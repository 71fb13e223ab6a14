//! # Billable Capability
//!
//! Anything with a unit price and a unit count can be billed.

use crate::money::Money;

/// An object that has a unit price and can calculate the total to bill.
///
/// Implementers own validation of their unit counts; the trait itself
/// defines no error conditions.
///
/// ```rust
/// use rental_core::{Billable, Money, Rental};
///
/// let mut rental = Rental::by_day(2);
/// assert_eq!(rental.total_price(), Money::from_major(40));
///
/// rental.set_units(3);
/// assert_eq!(rental.total_price(), Money::from_major(60));
/// ```
pub trait Billable {
    /// Price charged per unit.
    fn unit_price(&self) -> Money;

    /// Number of units to bill.
    fn units(&self) -> i64;

    /// Replaces the number of units to bill.
    fn set_units(&mut self, units: i64);

    /// Unit price × units.
    fn total_price(&self) -> Money {
        self.unit_price().multiply_units(self.units())
    }
}
