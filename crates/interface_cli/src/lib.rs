//! CLI Interface Layer
//!
//! This crate is the collaborator of the billing core: it plays the role the
//! interactive form plays in the original application. It owns everything the
//! domain deliberately does not — shop configuration, request parsing and
//! defaulting, the running product session, and the `billing-cli` binary.
//!
//! # Architecture
//!
//! - **Config**: shop identity from `billing.toml` / `BILL_*` environment
//! - **DTOs**: JSON bill requests with the form's defaulting rules
//! - **Session**: the caller-owned running list of line items
//! - **Error Handling**: one error type wrapping IO, parsing, and domain
//!   failures
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::{config::ShopConfig, dto::BillRequest, generate_from_request};
//!
//! let request: BillRequest = serde_json::from_str(&raw)?;
//! let bill = generate_from_request(&ShopConfig::default(), request)?;
//! println!("{}", bill.text);
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod session;

use core_kernel::Money;
use domain_billing::{generate_bill_content, ShopInfo};

use crate::config::ShopConfig;
use crate::dto::BillRequest;
use crate::error::CliError;
use crate::session::BillSession;

/// A generated bill, ready to print or save
#[derive(Debug, Clone)]
pub struct GeneratedBill {
    /// The rendered text block
    pub text: String,
    /// Sum of the line totals
    pub total: Money,
    /// Download-style filename: `bill_<customer>_<date>.txt`
    pub suggested_filename: String,
}

/// Builds a session from a bill request and renders the bill.
///
/// Requests without products are rejected here — the core treats an empty
/// line list as well-defined, but the interface never forwards one.
pub fn generate_from_request(
    shop: &ShopConfig,
    request: BillRequest,
) -> Result<GeneratedBill, CliError> {
    if request.products.is_empty() {
        return Err(CliError::EmptyBill);
    }

    let mut session = BillSession::new();
    for product in &request.products {
        session.add_product(
            &product.name,
            product.quantity,
            Money::new(product.unit_amount),
        )?;
    }

    // The filename uses the raw entered name, not the `N/A` default.
    let raw_customer_name = request.customer.name.clone().unwrap_or_default();
    let customer = request.customer.into_customer_info();
    let shop_info = ShopInfo {
        name: shop.name.clone(),
        address: shop.address.clone(),
        phone: shop.phone.clone(),
    };

    let (text, total) = generate_bill_content(&shop_info, &customer, session.products())?;

    tracing::info!(
        customer = %customer.name,
        products = session.len(),
        %total,
        "generated bill"
    );

    let suggested_filename = format!(
        "bill_{}_{}.txt",
        raw_customer_name.replace(' ', ""),
        customer.bill_date
    );

    Ok(GeneratedBill {
        text,
        total,
        suggested_filename,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request_with_pen() -> BillRequest {
        serde_json::from_value(serde_json::json!({
            "customer": {
                "name": "Asha Patil",
                "bill_date": "06-08-2026"
            },
            "products": [
                { "name": "Pen", "quantity": 2, "unit_amount": "10.00" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_generate_from_request_renders_bill() {
        let bill = generate_from_request(&ShopConfig::default(), request_with_pen()).unwrap();

        assert_eq!(bill.total, Money::new(dec!(20.00)));
        assert!(bill.text.contains("PEN"));
        assert!(bill.text.contains("Twenty Rupees Only"));
        assert_eq!(bill.suggested_filename, "bill_AshaPatil_06-08-2026.txt");
    }

    #[test]
    fn test_generate_from_request_rejects_empty_products() {
        let request: BillRequest =
            serde_json::from_value(serde_json::json!({ "products": [] })).unwrap();

        let err = generate_from_request(&ShopConfig::default(), request).unwrap_err();
        assert!(matches!(err, CliError::EmptyBill));
    }
}
