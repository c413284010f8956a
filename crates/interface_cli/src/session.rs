//! Bill session
//!
//! The running list of products for the bill being assembled. In the original
//! form this list lives in global UI session state; here it is an explicit
//! value owned by the interface layer, so the domain core stays stateless
//! between calls.

use core_kernel::Money;
use domain_billing::{BillingError, LineItem};

/// The caller-owned running product list
#[derive(Debug, Clone, Default)]
pub struct BillSession {
    products: Vec<LineItem>,
}

impl BillSession {
    /// Creates an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends a product line.
    ///
    /// # Errors
    ///
    /// Propagates the domain's line-item validation (blank name, zero
    /// quantity, negative amount).
    pub fn add_product(
        &mut self,
        name: &str,
        quantity: u32,
        unit_amount: Money,
    ) -> Result<(), BillingError> {
        let item = LineItem::new(name, quantity, unit_amount)?;
        tracing::debug!(product = %item.name(), quantity, "added product to session");
        self.products.push(item);
        Ok(())
    }

    /// Removes all products, starting a fresh bill
    pub fn clear(&mut self) {
        self.products.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn products(&self) -> &[LineItem] {
        &self.products
    }

    /// Consumes the session, yielding the line list
    pub fn into_products(self) -> Vec<LineItem> {
        self.products
    }
}
