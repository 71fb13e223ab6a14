//! # Invoice
//!
//! An ordered collection of rentals with a running subtotal and the family
//! rental discount.
//!
//! ## Invoice Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Invoice Operations                                   │
//! │                                                                         │
//! │  Caller Action            Method                   Invoice Change       │
//! │  ─────────────            ──────                   ──────────────       │
//! │                                                                         │
//! │  Add rental ─────────────► add_item(Some(r)) ────► items.push(r)       │
//! │                                                    subtotal += total    │
//! │                                                                         │
//! │  Add nothing ────────────► add_item(None) ───────► Err(InvalidArgument)│
//! │                                                    (no change)          │
//! │                                                                         │
//! │  Read totals ────────────► total_price() ────────► (read only)         │
//! │                                                                         │
//! │  NOTE: The subtotal is accumulated at insertion time. Changing a       │
//! │        stored item's units later does not change the subtotal.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Family Rental Discount
//! Invoices holding 3, 4 or 5 items get 30% off. Invoices with 0-2 or 6+
//! items pay the full subtotal.

use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::billable::Billable;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rental::{Rental, RentalKind};

/// Discount taken off eligible invoices, in basis points (3000 = 30%).
pub const FAMILY_RENTAL_DISCOUNT_BPS: u32 = 3000;

/// Item counts that qualify for the family rental discount.
pub const FAMILY_RENTAL_ITEM_RANGE: RangeInclusive<usize> = 3..=5;

// =============================================================================
// Invoice
// =============================================================================

/// An invoice containing rental items.
///
/// ## Invariants
/// - Items keep insertion order; the same rental may appear more than once
/// - Items are never removed
/// - `sub_total_price` is the sum of each item's total *when it was added*
#[derive(Debug, Clone)]
pub struct Invoice {
    id: Uuid,
    created_at: DateTime<Utc>,
    items: Vec<Rental>,
    sub_total: Money,
}

impl Invoice {
    /// Creates a new empty invoice.
    pub fn new() -> Self {
        Invoice {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            items: Vec::new(),
            sub_total: Money::zero(),
        }
    }

    /// Unique invoice identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When this invoice was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Adds a new item.
    ///
    /// ## Behavior
    /// - `None`: returns `CoreError::InvalidArgument`, invoice unchanged
    /// - otherwise: appends the item and adds its current total to the subtotal
    ///
    /// ```rust
    /// use rental_core::{Invoice, Rental};
    ///
    /// let mut invoice = Invoice::new();
    /// invoice.add_item(Rental::by_hour(10))?;
    /// assert!(invoice.add_item(None).is_err());
    /// assert_eq!(invoice.item_count(), 1);
    /// # Ok::<(), rental_core::CoreError>(())
    /// ```
    pub fn add_item(&mut self, item: impl Into<Option<Rental>>) -> CoreResult<()> {
        let item = item
            .into()
            .ok_or_else(|| CoreError::invalid_argument("item"))?;

        self.sub_total += item.total_price();
        self.items.push(item);
        Ok(())
    }

    /// Adds items in order, stopping at the first `None`.
    ///
    /// Items before the failing one stay on the invoice.
    pub fn add_items<I>(&mut self, items: I) -> CoreResult<()>
    where
        I: IntoIterator,
        I::Item: Into<Option<Rental>>,
    {
        for item in items {
            self.add_item(item)?;
        }
        Ok(())
    }

    /// Number of items on the invoice.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[Rental] {
        &self.items
    }

    /// Mutable access to a stored item.
    ///
    /// The subtotal was fixed when the item was added and is not updated.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut Rental> {
        self.items.get_mut(index)
    }

    /// Whether the invoice holds 3 to 5 items.
    pub fn applies_for_family_rental_discount(&self) -> bool {
        FAMILY_RENTAL_ITEM_RANGE.contains(&self.item_count())
    }

    /// Sum of all item prices at insertion time, before discounts.
    #[inline]
    pub fn sub_total_price(&self) -> Money {
        self.sub_total
    }

    /// Amount taken off by the family rental discount (zero when not eligible).
    pub fn discount(&self) -> Money {
        if self.applies_for_family_rental_discount() {
            self.sub_total.percentage_of(FAMILY_RENTAL_DISCOUNT_BPS)
        } else {
            Money::zero()
        }
    }

    /// Subtotal with the family rental discount applied where eligible.
    pub fn total_price(&self) -> Money {
        self.sub_total - self.discount()
    }

    /// Snapshot of the invoice for rendering or serialization.
    pub fn summary(&self) -> InvoiceSummary {
        InvoiceSummary {
            id: self.id,
            created_at: self.created_at,
            items: self.items.iter().map(LineSummary::from).collect(),
            item_count: self.item_count(),
            sub_total_price: self.sub_total_price(),
            applies_for_family_rental_discount: self.applies_for_family_rental_discount(),
            discount: self.discount(),
            total_price: self.total_price(),
        }
    }
}

impl Default for Invoice {
    fn default() -> Self {
        Invoice::new()
    }
}

// =============================================================================
// Summaries
// =============================================================================

/// One rendered invoice line.
///
/// `total_price` is the item's current total, which can differ from what it
/// contributed to the subtotal if the item was changed after insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSummary {
    pub kind: RentalKind,
    pub units: i64,
    pub unit_price: Money,
    pub total_price: Money,
}

impl From<&Rental> for LineSummary {
    fn from(rental: &Rental) -> Self {
        LineSummary {
            kind: rental.kind(),
            units: rental.units(),
            unit_price: rental.unit_price(),
            total_price: rental.total_price(),
        }
    }
}

/// Serializable view of an [`Invoice`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub items: Vec<LineSummary>,
    pub item_count: usize,
    pub sub_total_price: Money,
    pub applies_for_family_rental_discount: bool,
    pub discount: Money,
    pub total_price: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
