//! Billing domain errors

use core_kernel::{Money, WordsError};
use thiserror::Error;

/// Errors that can occur in the billing domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BillingError {
    /// Line item has no product name
    #[error("Product name must not be empty")]
    EmptyProductName,

    /// Line item quantity below one
    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    /// Line item priced below zero
    #[error("Unit amount must not be negative: {0}")]
    NegativeAmount(Money),

    /// The bill total could not be spelled in words
    #[error("{0}")]
    Words(#[from] WordsError),
}
