//! Bill data model
//!
//! Shop and customer metadata, validated line items, and the derived
//! [`Bill`] value built fresh for each generation request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{rupees_in_words, Money};

use crate::error::BillingError;

/// Shop details printed in the bill header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Customer block of the bill
///
/// `bill_date` is a pre-formatted display string; the interface layer decides
/// the date format, the domain never parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub bill_date: String,
}

/// A single product entry on the bill
///
/// Immutable once constructed; the caller's session list owns it. The
/// `total` field is fixed at construction time and the renderer sums these
/// fields as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    name: String,
    quantity: u32,
    unit_amount: Money,
    total: Money,
}

impl LineItem {
    /// Validates and builds a line item, computing `quantity × unit_amount`.
    ///
    /// Product names are trimmed and stored uppercased, the way they appear
    /// in the printed product table.
    ///
    /// # Errors
    ///
    /// Rejects empty names, zero quantities, and negative unit amounts.
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit_amount: Money,
    ) -> Result<Self, BillingError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(BillingError::EmptyProductName);
        }
        if quantity == 0 {
            return Err(BillingError::ZeroQuantity);
        }
        if unit_amount.is_negative() {
            return Err(BillingError::NegativeAmount(unit_amount));
        }

        let total = unit_amount * Decimal::from(quantity);
        Ok(Self {
            name: trimmed.to_uppercase(),
            quantity,
            unit_amount,
            total,
        })
    }

    /// Builds a line item with a caller-supplied total, preserving whatever
    /// rounding the caller applied. No validation is performed.
    pub fn from_parts(
        name: impl Into<String>,
        quantity: u32,
        unit_amount: Money,
        total: Money,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_amount,
            total,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_amount(&self) -> Money {
        self.unit_amount
    }

    pub fn total(&self) -> Money {
        self.total
    }
}

/// A bill's derived data: lines, total, and the total spelled in words.
///
/// Constructed fresh per generation request; never stored. Invariant: `total`
/// equals the sum of the per-line totals at the moment of construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    lines: Vec<LineItem>,
    total: Money,
    amount_in_words: String,
}

impl Bill {
    /// Derives the total and words phrase from the caller's line list.
    ///
    /// An empty list is well-defined: total zero, "Zero Rupees Only".
    ///
    /// # Errors
    ///
    /// Fails only when the summed total cannot be spelled (negative or
    /// out-of-range caller-supplied line totals).
    pub fn from_lines(lines: Vec<LineItem>) -> Result<Self, BillingError> {
        let total: Money = lines.iter().map(LineItem::total).sum();
        let amount_in_words = rupees_in_words(total)?;

        Ok(Self {
            lines,
            total,
            amount_in_words,
        })
    }

    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn amount_in_words(&self) -> &str {
        &self.amount_in_words
    }
}
