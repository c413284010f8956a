//! End-to-end tests for the bill generation flow
//!
//! Drives the interface layer the way the binary does: a JSON request goes
//! in, a rendered bill comes out. Uses the shared builders from `test_utils`.

use rust_decimal_macros::dec;

use core_kernel::Money;
use interface_cli::config::ShopConfig;
use interface_cli::dto::BillRequest;
use interface_cli::error::CliError;
use interface_cli::generate_from_request;
use test_utils::BillRequestBuilder;

fn test_shop() -> ShopConfig {
    ShopConfig {
        name: "SHARMA GENERAL STORE".to_string(),
        address: "14 MG Road, Pune".to_string(),
        phone: "9876543210".to_string(),
    }
}

fn parse(builder: BillRequestBuilder) -> BillRequest {
    serde_json::from_value(builder.build_json()).expect("builder produced valid request JSON")
}

#[test]
fn test_full_generation_flow() {
    let request = parse(
        BillRequestBuilder::new()
            .with_customer_name("Asha Patil")
            .with_customer_phone("9123456780")
            .with_customer_address("Flat 3, Green Residency")
            .with_bill_date("06-08-2026")
            .with_product("Pen", 2, dec!(10.00))
            .with_product("Notebook", 1, dec!(45.00)),
    );

    let bill = generate_from_request(&test_shop(), request).unwrap();

    assert_eq!(bill.total, Money::new(dec!(65.00)));
    assert!(bill.text.contains("SHARMA GENERAL STORE"));
    assert!(bill.text.contains("NAME   : Asha Patil"));
    assert!(bill.text.contains("PEN"));
    assert!(bill.text.contains("NOTEBOOK"));
    assert!(bill.text.contains("IN WORDS: Sixty Five Rupees Only"));
    assert_eq!(bill.suggested_filename, "bill_AshaPatil_06-08-2026.txt");
}

#[test]
fn test_anonymous_customer_defaults() {
    let request = parse(
        BillRequestBuilder::new()
            .with_bill_date("06-08-2026")
            .with_product("Pen", 1, dec!(10.00)),
    );

    let bill = generate_from_request(&test_shop(), request).unwrap();

    assert!(bill.text.contains("NAME   : N/A"));
    assert!(bill.text.contains("PHONE  : N/A"));
    assert!(bill.text.contains("ADDRESS: N/A"));
    assert_eq!(bill.suggested_filename, "bill__06-08-2026.txt");
}

#[test]
fn test_empty_request_is_rejected_before_the_core() {
    let request = parse(BillRequestBuilder::new());

    let err = generate_from_request(&test_shop(), request).unwrap_err();
    assert!(matches!(err, CliError::EmptyBill));
}

#[test]
fn test_invalid_product_is_rejected() {
    let request = parse(BillRequestBuilder::new().with_product("   ", 1, dec!(10.00)));

    let err = generate_from_request(&test_shop(), request).unwrap_err();
    assert!(matches!(err, CliError::Billing(_)));
}

#[test]
fn test_generation_is_deterministic() {
    let build = || {
        parse(
            BillRequestBuilder::new()
                .with_customer_name("Asha Patil")
                .with_bill_date("06-08-2026")
                .with_product("Pen", 2, dec!(10.00)),
        )
    };

    let first = generate_from_request(&test_shop(), build()).unwrap();
    let second = generate_from_request(&test_shop(), build()).unwrap();

    assert_eq!(first.text, second.text);
    assert_eq!(first.total, second.total);
}
