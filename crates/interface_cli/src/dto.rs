//! Bill request DTOs
//!
//! JSON shapes accepted by the CLI, with the original form's defaulting
//! rules: blank customer fields render as `N/A`, a missing bill date becomes
//! today in `dd-mm-YYYY`.

use chrono::Local;
use rust_decimal::Decimal;
use serde::Deserialize;

use domain_billing::CustomerInfo;

/// Date format used for defaulted bill dates
const BILL_DATE_FORMAT: &str = "%d-%m-%Y";

/// Customer block of a bill request, all fields optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerDetails {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub bill_date: Option<String>,
}

impl CustomerDetails {
    /// Applies the form's defaults and produces the domain customer block.
    pub fn into_customer_info(self) -> CustomerInfo {
        CustomerInfo {
            name: or_not_available(self.name),
            phone: or_not_available(self.phone),
            address: or_not_available(self.address),
            bill_date: self
                .bill_date
                .filter(|date| !date.trim().is_empty())
                .unwrap_or_else(|| Local::now().format(BILL_DATE_FORMAT).to_string()),
        }
    }
}

/// One product row of a bill request
#[derive(Debug, Clone, Deserialize)]
pub struct ProductEntry {
    pub name: String,
    pub quantity: u32,
    pub unit_amount: Decimal,
}

/// A complete bill generation request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BillRequest {
    #[serde(default)]
    pub customer: CustomerDetails,
    #[serde(default)]
    pub products: Vec<ProductEntry>,
}

fn or_not_available(field: Option<String>) -> String {
    field
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| "N/A".to_string())
}
