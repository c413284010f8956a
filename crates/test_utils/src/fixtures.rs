//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for the billing test suites, designed to be
//! consistent and predictable across crates.

use rust_decimal_macros::dec;

use core_kernel::Money;
use domain_billing::{CustomerInfo, LineItem, ShopInfo};

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Twenty rupees, the canonical single-line bill total
    pub fn rupees_20() -> Money {
        Money::new(dec!(20.00))
    }

    /// Fifty paise, for paise-only spelling tests
    pub fn fifty_paise() -> Money {
        Money::new(dec!(0.50))
    }

    /// One crore rupees, for large-amount grouping tests
    pub fn one_crore() -> Money {
        Money::new(dec!(10000000))
    }

    /// A zero amount
    pub fn zero() -> Money {
        Money::zero()
    }
}

/// Fixture for shop header data
pub struct ShopFixtures;

impl ShopFixtures {
    /// The standard test shop
    pub fn corner_store() -> ShopInfo {
        ShopInfo {
            name: "SHARMA GENERAL STORE".to_string(),
            address: "14 MG Road, Pune".to_string(),
            phone: "9876543210".to_string(),
        }
    }
}

/// Fixture for customer block data
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// A fully-specified customer with a fixed bill date
    pub fn regular() -> CustomerInfo {
        CustomerInfo {
            name: "Asha Patil".to_string(),
            phone: "9123456780".to_string(),
            address: "Flat 3, Green Residency".to_string(),
            bill_date: "06-08-2026".to_string(),
        }
    }

    /// The anonymous walk-in customer the form produces when fields are
    /// left blank
    pub fn walk_in() -> CustomerInfo {
        CustomerInfo {
            name: "N/A".to_string(),
            phone: "N/A".to_string(),
            address: "N/A".to_string(),
            bill_date: "06-08-2026".to_string(),
        }
    }
}

/// Fixture for line-item data
pub struct LineFixtures;

impl LineFixtures {
    /// Two pens at ten rupees each
    pub fn pens() -> LineItem {
        LineItem::new("Pen", 2, Money::new(dec!(10.00))).expect("valid fixture line")
    }

    /// A small stationery basket totalling 80 rupees
    pub fn stationery() -> Vec<LineItem> {
        vec![
            Self::pens(),
            LineItem::new("Notebook", 1, Money::new(dec!(45.00))).expect("valid fixture line"),
            LineItem::new("Eraser", 3, Money::new(dec!(5.00))).expect("valid fixture line"),
        ]
    }
}
