//! # Money Module
//!
//! Provides the `Money` type for handling monetary values exactly.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    85.0 * 0.7 = 59.49999999999999  ❌ WRONG!                            │
//! │                                                                         │
//! │  OUR SOLUTION: Base-10 Decimal                                          │
//! │    85 - (85 × 3000 / 10000) = 59.5 exactly                             │
//! │    Discounts never lose a fraction of a cent                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rental_core::money::Money;
//!
//! let price = Money::from_major(20);          // $20.00
//! let total = price.multiply_units(3);        // $60.00
//! let sum = total + Money::from_cents(550);   // $65.50
//! assert_eq!(sum.to_string(), "$65.50");
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Basis points in one whole (100%).
pub const BPS_PER_WHOLE: u32 = 10_000;

// =============================================================================
// Money Type
// =============================================================================

/// An exact amount in the single supported currency.
///
/// ## Design Decisions
/// - **`Decimal` inner value**: 96-bit base-10 mantissa, so `0.7 × 85` is
///   exactly `59.5`
/// - **Signed**: the arithmetic allows negative intermediate values
/// - **Serialized as a string** (`"59.5"`) so JSON consumers never see floats
///
/// ## Where Money is Used
/// ```text
/// RentalKind::unit_price ──► Rental::total_price ──► Invoice::sub_total_price
///                                                          │
///                                         family discount ─┤
///                                                          ▼
///                                                 Invoice::total_price
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from whole currency units.
    ///
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(5).to_string(), "$5.00");
    /// ```
    #[inline]
    pub fn from_major(major: i64) -> Self {
        Money(Decimal::from(major))
    }

    /// Creates a Money value from cents (hundredths of a unit).
    ///
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let price = Money::from_cents(5950);
    /// assert_eq!(price, Money::from_major(59) + Money::from_cents(50));
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Wraps an existing decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact decimal amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Multiplies money by a unit count.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let hourly = Money::from_major(5);
    /// assert_eq!(hourly.multiply_units(10), Money::from_major(50));
    /// ```
    #[inline]
    pub fn multiply_units(&self, units: i64) -> Self {
        Money(self.0 * Decimal::from(units))
    }

    /// Returns `bps` basis points of this amount, without rounding.
    ///
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// // 30% of $85.00
    /// assert_eq!(Money::from_major(85).percentage_of(3000), Money::from_cents(2550));
    /// ```
    pub fn percentage_of(&self, bps: u32) -> Money {
        let rate = Decimal::from(bps) / Decimal::from(BPS_PER_WHOLE);
        Money(self.0 * rate)
    }

    /// Applies a percentage discount and returns the discounted amount.
    ///
    /// ## Arguments
    /// * `discount_bps` - Discount in basis points (3000 = 30%)
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::money::Money;
    ///
    /// let subtotal = Money::from_major(85);
    /// let discounted = subtotal.apply_percentage_discount(3000);
    /// assert_eq!(discounted, Money::from_cents(5950));
    /// ```
    pub fn apply_percentage_discount(&self, discount_bps: u32) -> Money {
        *self - self.percentage_of(discount_bps)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$12.34`, keeping any sub-cent digits.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let mut amount = self.0.abs().normalize();
        if amount.scale() < 2 {
            amount.rescale(2);
        }
        write!(f, "{}${}", sign, amount)
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a unit count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, units: i64) -> Self {
        self.multiply_units(units)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_major_and_cents_agree() {
        assert_eq!(Money::from_major(20), Money::from_cents(2000));
        assert_eq!(Money::from_cents(2000).amount(), Decimal::from(20));
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_major(85).to_string(), "$85.00");
        assert_eq!(Money::from_cents(5950).to_string(), "$59.50");
        assert_eq!(Money::from_cents(-550).to_string(), "-$5.50");
        assert_eq!(Money::zero().to_string(), "$0.00");
        // sub-cent amounts are shown, never rounded away
        assert_eq!(Money::from_cents(1).percentage_of(3000).to_string(), "$0.003");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(10);
        let b = Money::from_major(5);

        assert_eq!(a + b, Money::from_major(15));
        assert_eq!(a - b, Money::from_major(5));
        assert_eq!(a * 3, Money::from_major(30));

        let mut c = a;
        c += b;
        c -= Money::from_major(1);
        assert_eq!(c, Money::from_major(14));
    }

    #[test]
    fn test_percentage_discount_is_exact() {
        let subtotal = Money::from_major(85);
        assert_eq!(subtotal.apply_percentage_discount(3000), Money::from_cents(5950));

        // 0.7 of one cent stays 0.7 of one cent
        let tiny = Money::from_cents(1);
        assert_eq!(
            tiny.apply_percentage_discount(3000).amount(),
            Decimal::new(7, 3)
        );
    }

    #[test]
    fn test_zero_discount_is_identity() {
        let subtotal = Money::from_major(42);
        assert_eq!(subtotal.apply_percentage_discount(0), subtotal);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_major(20), Money::from_major(5), Money::from_major(60)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_major(85));
        assert_eq!(Vec::<Money>::new().into_iter().sum::<Money>(), Money::zero());
    }

    #[test]
    fn test_zero_and_checks() {
        assert!(Money::zero().is_zero());
        assert!(!Money::zero().is_negative());
        assert!(Money::from_major(-1).is_negative());
        assert!(!Money::from_major(1).is_negative());
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Money::from_cents(5950)).expect("serialize");
        assert_eq!(json, "\"59.50\"");
        let back: Money = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, Money::from_cents(5950));
    }
}
