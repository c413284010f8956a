//! Billing Domain - Bill Model and Text Rendering
//!
//! This crate implements the billing domain for the shop bill generator:
//! the shop/customer/line-item data model, the derived [`Bill`] with its
//! total and amount-in-words phrase, and the fixed-width text renderer that
//! produces the printable invoice.
//!
//! # Design
//!
//! Line items are owned by the caller (the interface layer keeps the running
//! session list); a [`Bill`] is derived fresh on every generation request and
//! has no lifecycle of its own. The renderer trusts the per-line totals it is
//! given — it sums them without recomputing `quantity × unit_amount`, so the
//! caller's rounding is preserved.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{generate_bill_content, LineItem, ShopInfo, CustomerInfo};
//!
//! let lines = vec![LineItem::new("Pen", 2, Money::new(dec!(10.00)))?];
//! let (text, total) = generate_bill_content(&shop, &customer, &lines)?;
//! ```

pub mod bill;
pub mod error;
pub mod render;

pub use bill::{Bill, CustomerInfo, LineItem, ShopInfo};
pub use error::BillingError;
pub use render::{generate_bill_content, render_bill};
