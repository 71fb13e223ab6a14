//! # rental-core: Pure Pricing Logic for Bike Rentals
//!
//! This crate computes rental charges and invoice totals. It contains pure
//! functions and plain data types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Bike Rental Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    rental-cli (bike-rental)                     │   │
//! │  │    args ──► config ──► build invoice ──► text / JSON output     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rental-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  money   │  │ billable │  │  rental  │  │   invoice    │   │   │
//! │  │   │  Money   │  │ Billable │  │  Rental  │  │   Invoice    │   │   │
//! │  │   │ (Decimal)│  │  trait   │  │RentalKind│  │   Summary    │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact decimal money
//! - [`billable`] - The `Billable` capability
//! - [`rental`] - Hourly, daily and weekly rentals
//! - [`invoice`] - Invoices and the family rental discount
//! - [`error`] - Domain error types
//! - [`validation`] - Unit count validation
//!
//! ## Example Usage
//!
//! ```rust
//! use rental_core::{Invoice, Money, Rental};
//!
//! let mut invoice = Invoice::new();
//! invoice.add_item(Rental::by_day(1))?;
//! invoice.add_item(Rental::by_hour(1))?;
//! invoice.add_item(Rental::by_week(1))?;
//!
//! // 3 items: family rental discount applies
//! assert_eq!(invoice.sub_total_price(), Money::from_major(85));
//! assert_eq!(invoice.total_price(), Money::from_cents(5950));
//! # Ok::<(), rental_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billable;
pub mod error;
pub mod invoice;
pub mod money;
pub mod rental;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use billable::Billable;
pub use error::{CoreError, CoreResult, ValidationError};
pub use invoice::{
    Invoice, InvoiceSummary, LineSummary, FAMILY_RENTAL_DISCOUNT_BPS, FAMILY_RENTAL_ITEM_RANGE,
};
pub use money::Money;
pub use rental::{Rental, RentalKind};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum units accepted by the checked constructors and the CLI.
pub const MAX_RENTAL_UNITS: i64 = 10_000;
