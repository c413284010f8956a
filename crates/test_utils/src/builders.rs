//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

use core_kernel::Money;
use domain_billing::LineItem;

/// Builder for line items
pub struct LineItemBuilder {
    name: String,
    quantity: u32,
    unit_amount: Money,
}

impl Default for LineItemBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LineItemBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            name: "Pen".to_string(),
            quantity: 2,
            unit_amount: Money::new(dec!(10.00)),
        }
    }

    /// Sets the product name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the quantity
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the unit amount
    pub fn with_unit_amount(mut self, unit_amount: Money) -> Self {
        self.unit_amount = unit_amount;
        self
    }

    /// Builds the line item, panicking on invalid test data
    pub fn build(self) -> LineItem {
        LineItem::new(self.name, self.quantity, self.unit_amount)
            .expect("builder produced an invalid line item")
    }
}

/// Builder for bill request JSON payloads, as accepted by the CLI interface
pub struct BillRequestBuilder {
    customer_name: Option<String>,
    customer_phone: Option<String>,
    customer_address: Option<String>,
    bill_date: Option<String>,
    products: Vec<Value>,
}

impl Default for BillRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BillRequestBuilder {
    /// Creates a builder with no customer details and no products
    pub fn new() -> Self {
        Self {
            customer_name: None,
            customer_phone: None,
            customer_address: None,
            bill_date: None,
            products: Vec::new(),
        }
    }

    /// Sets the customer name
    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }

    /// Sets the customer phone
    pub fn with_customer_phone(mut self, phone: impl Into<String>) -> Self {
        self.customer_phone = Some(phone.into());
        self
    }

    /// Sets the customer address
    pub fn with_customer_address(mut self, address: impl Into<String>) -> Self {
        self.customer_address = Some(address.into());
        self
    }

    /// Sets the pre-formatted bill date
    pub fn with_bill_date(mut self, date: impl Into<String>) -> Self {
        self.bill_date = Some(date.into());
        self
    }

    /// Appends a product entry
    pub fn with_product(mut self, name: &str, quantity: u32, unit_amount: Decimal) -> Self {
        self.products.push(json!({
            "name": name,
            "quantity": quantity,
            "unit_amount": unit_amount,
        }));
        self
    }

    /// Builds the request as a JSON value
    pub fn build_json(self) -> Value {
        let mut customer = serde_json::Map::new();
        if let Some(name) = self.customer_name {
            customer.insert("name".to_string(), json!(name));
        }
        if let Some(phone) = self.customer_phone {
            customer.insert("phone".to_string(), json!(phone));
        }
        if let Some(address) = self.customer_address {
            customer.insert("address".to_string(), json!(address));
        }
        if let Some(date) = self.bill_date {
            customer.insert("bill_date".to_string(), json!(date));
        }

        json!({
            "customer": customer,
            "products": self.products,
        })
    }
}
